use axum::{routing::post, Router};

use crate::{handlers::otp, state::AppState};

pub fn otp_routes() -> Router<AppState> {
    Router::new()
        // Issue (or re-issue) an OTP for an aadhaar number
        .route("/generate-otp", post(otp::generate_otp))

        // Verify and consume it
        .route("/verify-otp", post(otp::verify_otp))
}
