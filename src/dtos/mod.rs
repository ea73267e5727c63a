pub mod registration_dtos;

pub use registration_dtos::{
    BusinessStep, GenerateOtpResponse, IdentityStep, RegistrationForm, RegistrationResponse,
    VerifyOtpRequest, VerifyOtpResponse,
};
