use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::dtos::{RegistrationForm, RegistrationResponse};
use crate::errors::{AppError, Result};
use crate::middleware::AppJson;
use crate::state::AppState;
use crate::validation::{validate_step1, validate_step2};

pub async fn submit_registration(
    State(state): State<AppState>,
    AppJson(form): AppJson<RegistrationForm>,
) -> Result<Json<RegistrationResponse>> {
    if let Some(error) = validate_step1(&form.identity) {
        return Err(AppError::ValidationError(error));
    }

    let errors = validate_step2(&form.business);
    if !errors.is_empty() {
        return Err(AppError::FieldErrors(errors));
    }

    let registration = state.store.create_registration(form.into()).await?;
    let udyam_number = registration.udyam_number(Utc::now());

    info!(id = registration.id, %udyam_number, "registration created");

    Ok(Json(RegistrationResponse {
        success: true,
        message: "Registration successful".to_string(),
        udyam_number,
    }))
}
