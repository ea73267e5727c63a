pub(crate) mod otp;
pub(crate) mod pincode;
pub(crate) mod registration;

pub(crate) async fn root_handler() -> &'static str {
    "Udyam Registration API is running"
}
