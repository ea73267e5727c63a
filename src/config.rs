// config.rs
use std::{env, path::PathBuf};

use tracing::info;

use crate::errors::{AppError, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
pub const DEFAULT_PINCODE_API_URL: &str = "https://api.postalpincode.in";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub client_origin: String,
    pub frontend_dist: PathBuf,
    pub pincode_api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: DEFAULT_PORT,
            database_url: String::new(),
            client_origin: DEFAULT_CLIENT_ORIGIN.to_string(),
            frontend_dist: PathBuf::from(DEFAULT_FRONTEND_DIST),
            pincode_api_url: DEFAULT_PINCODE_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; everything else falls back to a default.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::configuration(format!("PORT must be a number: {}", e)))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::configuration("DATABASE_URL must be set"))?;

        let config = AppConfig {
            port,
            database_url,
            client_origin: var_or("CLIENT_ORIGIN", DEFAULT_CLIENT_ORIGIN),
            frontend_dist: PathBuf::from(var_or("FRONTEND_DIST", DEFAULT_FRONTEND_DIST)),
            pincode_api_url: var_or("PINCODE_API_URL", DEFAULT_PINCODE_API_URL),
        };

        info!(
            port = config.port,
            client_origin = %config.client_origin,
            frontend_dist = %config.frontend_dist.display(),
            "configuration loaded"
        );

        Ok(config)
    }

    pub fn index_file(&self) -> PathBuf {
        self.frontend_dist.join("index.html")
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
