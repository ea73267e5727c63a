pub mod otp;
pub mod pincode;
pub mod registration;

pub use otp::OtpRecord;
pub use pincode::PincodeLocation;
pub use registration::{NewRegistration, Registration};
