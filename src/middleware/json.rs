use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections render as a 400 [`AppError`] instead of axum's 415/422 text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
