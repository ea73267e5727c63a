#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use udyam_api::config::AppConfig;
use udyam_api::database::RegistrationStore;
use udyam_api::{build_router, AppState};

pub fn app_with(store: Arc<dyn RegistrationStore>, config: AppConfig) -> Router {
    build_router(AppState::new(store, config)).expect("failed to build router")
}

pub fn app(store: Arc<dyn RegistrationStore>) -> Router {
    app_with(store, AppConfig::default())
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("failed to build request");
    let (status, body) = send(app, req).await;
    let json = serde_json::from_slice(&body).expect("response body was not json");
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}
