use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{AppError, Result};
use crate::models::PincodeLocation;
use crate::state::AppState;
use crate::validation::is_valid_pincode;

pub async fn lookup_pincode(
    State(state): State<AppState>,
    Path(pincode): Path<String>,
) -> Result<Json<PincodeLocation>> {
    if !is_valid_pincode(&pincode) {
        return Err(AppError::ValidationError(
            "Pincode must be exactly 6 digits".to_string(),
        ));
    }

    state
        .pincode_service
        .lookup(&pincode)
        .await?
        .map(Json)
        .ok_or(AppError::PincodeNotFound)
}
