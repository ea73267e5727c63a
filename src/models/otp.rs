use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The live OTP for an aadhaar number. At most one exists per aadhaar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OtpRecord {
    pub aadhaar: String,
    pub otp: String, // 6 digits, stored as issued
}
