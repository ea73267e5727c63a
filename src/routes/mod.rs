use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::errors::{AppError, Result};
use crate::handlers::root_handler;
use crate::state::AppState;

pub mod otp_routes;
pub mod registration_routes;

/// Builds the full application router.
///
/// API routes live under `/api`. Anything unmatched is looked up in the
/// client bundle and, failing that, answered with its `index.html`.
pub fn build_router(state: AppState) -> Result<Router> {
    let origin = state
        .config
        .client_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::configuration(format!("invalid CLIENT_ORIGIN: {}", e)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let frontend = ServeDir::new(&state.config.frontend_dist)
        .fallback(ServeFile::new(state.config.index_file()));

    let api = Router::new()
        .merge(otp_routes::otp_routes())
        .merge(registration_routes::registration_routes());

    Ok(Router::new()
        .route("/", get(root_handler))
        .nest("/api", api)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
