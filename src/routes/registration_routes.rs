use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{pincode, registration},
    state::AppState,
};

pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/submit-registration", post(registration::submit_registration))
        .route("/lookup-pincode/:pincode", get(pincode::lookup_pincode))
}
