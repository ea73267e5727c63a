use axum::{extract::State, Json};

use crate::dtos::{GenerateOtpResponse, IdentityStep, VerifyOtpRequest, VerifyOtpResponse};
use crate::errors::{AppError, Result};
use crate::middleware::AppJson;
use crate::state::AppState;
use crate::validation::validate_step1;

// 1. Generate OTP
// The OTP is echoed back because the existing client reads it from the response.
pub async fn generate_otp(
    State(state): State<AppState>,
    AppJson(req): AppJson<IdentityStep>,
) -> Result<Json<GenerateOtpResponse>> {
    if let Some(error) = validate_step1(&req) {
        return Err(AppError::ValidationError(error));
    }

    let otp = state.otp_service.issue(&req.aadhaar).await?;

    Ok(Json(GenerateOtpResponse {
        message: "OTP sent successfully".to_string(),
        otp,
    }))
}

// 2. Verify OTP
pub async fn verify_otp(
    State(state): State<AppState>,
    AppJson(req): AppJson<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>> {
    if !state.otp_service.verify(&req.aadhaar, &req.otp).await? {
        return Err(AppError::InvalidOtp);
    }

    Ok(Json(VerifyOtpResponse {
        success: true,
        message: "OTP verified".to_string(),
    }))
}
