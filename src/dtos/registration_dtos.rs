use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::NewRegistration;
use crate::validation::{AADHAAR_RE, NOT_BLANK_RE, PAN_RE, PINCODE_RE};

// Request DTOs

// Absent and `null` fields both become "", so validation reports them as missing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Step one of the form: the identity being verified.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct IdentityStep {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "Aadhaar number is required"),
        regex(path = *AADHAAR_RE, message = "Aadhaar number must be exactly 12 digits")
    )]
    pub aadhaar: String,
}

/// Step two of the form: business and address details.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BusinessStep {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "PAN is required"),
        regex(path = *PAN_RE, message = "Invalid PAN format")
    )]
    pub pan: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(regex(path = *NOT_BLANK_RE, message = "Name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "Pincode is required"),
        regex(path = *PINCODE_RE, message = "Pincode must be exactly 6 digits")
    )]
    pub pincode: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(regex(path = *NOT_BLANK_RE, message = "State is required"))]
    pub state: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(regex(path = *NOT_BLANK_RE, message = "District is required"))]
    pub district: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(regex(path = *NOT_BLANK_RE, message = "Address is required"))]
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub aadhaar: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub otp: String,
}

/// The full registration body: both steps in one flat JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(flatten)]
    pub identity: IdentityStep,
    #[serde(flatten)]
    pub business: BusinessStep,
}

impl From<RegistrationForm> for NewRegistration {
    fn from(form: RegistrationForm) -> Self {
        NewRegistration {
            aadhaar: form.identity.aadhaar,
            pan: form.business.pan,
            name: form.business.name,
            pincode: form.business.pincode,
            state: form.business.state,
            district: form.business.district,
            address: form.business.address,
        }
    }
}

// Response DTOs

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateOtpResponse {
    pub message: String,
    pub otp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "udyamNumber")]
    pub udyam_number: String,
}
