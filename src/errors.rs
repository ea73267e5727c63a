// src/errors.rs
use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    ValidationError(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    FieldErrors(BTreeMap<String, String>),

    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("Aadhaar number already registered")]
    DuplicateKey,

    #[error("No location found for pincode")]
    PincodeNotFound,

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::FieldErrors(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            AppError::InvalidPayload(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request body" }),
            ),
            AppError::InvalidOtp | AppError::DuplicateKey => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::PincodeNotFound => (StatusCode::NOT_FOUND, json!({ "error": self.to_string() })),
            AppError::ExternalApi(_) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Pincode lookup service unavailable" }),
            ),
            AppError::Database(_) | AppError::ConfigurationError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ExternalApi(format!("HTTP request failed: {}", err))
    }
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::ConfigurationError(msg.into())
    }

    /// Maps a store error to [`AppError::DuplicateKey`] when it is a unique-constraint violation.
    pub fn from_store(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if unique_violation {
            AppError::DuplicateKey
        } else {
            AppError::Database(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn database_errors_are_opaque() {
        let (status, body) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn field_errors_use_errors_key() {
        let mut errors = BTreeMap::new();
        errors.insert("pan".to_string(), "Invalid PAN format".to_string());
        let (status, body) = render(AppError::FieldErrors(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": { "pan": "Invalid PAN format" } }));
    }

    #[tokio::test]
    async fn duplicate_key_has_fixed_message() {
        let (status, body) = render(AppError::DuplicateKey).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Aadhaar number already registered");
    }

    #[test]
    fn non_database_store_errors_stay_opaque() {
        assert!(matches!(
            AppError::from_store(sqlx::Error::RowNotFound),
            AppError::Database(_)
        ));
    }
}
