mod common;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::http::StatusCode;
use udyam_api::config::AppConfig;
use udyam_api::database::MemoryStore;

use common::{app_with, get};

const INDEX: &str = "<!doctype html><div id=\"root\"></div>";
const SCRIPT: &str = "console.log('udyam');";

fn temp_dist(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut dir = std::env::temp_dir();
    dir.push(format!("udyam-dist-{}-{}-{}", name, std::process::id(), nanos));
    fs::create_dir_all(dir.join("assets")).expect("failed to create dist dir");
    fs::write(dir.join("index.html"), INDEX).expect("failed to write index");
    fs::write(dir.join("assets/app.js"), SCRIPT).expect("failed to write asset");
    dir
}

fn config_for(dist: &Path) -> AppConfig {
    AppConfig {
        frontend_dist: dist.to_path_buf(),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn serves_bundle_files_and_falls_back_to_index() {
    let dist = temp_dist("spa");
    let app = app_with(Arc::new(MemoryStore::new()), config_for(&dist));

    let (status, body) = get(&app, "/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SCRIPT.as_bytes());

    for route in ["/register", "/register/step-2", "/api/unknown"] {
        let (status, body) = get(&app, route).await;
        assert_eq!(status, StatusCode::OK, "{route} not served");
        assert_eq!(body, INDEX.as_bytes(), "{route} did not get index.html");
    }

    // The liveness route wins over the bundle's index.html.
    let (_, body) = get(&app, "/").await;
    assert_eq!(body, b"Udyam Registration API is running");

    let _ = fs::remove_dir_all(&dist);
}
