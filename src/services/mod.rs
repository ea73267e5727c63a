pub mod otp_service;
pub mod pincode_service;

pub use otp_service::OtpService;
pub use pincode_service::PincodeService;
