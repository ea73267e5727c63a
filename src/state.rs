use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::RegistrationStore;
use crate::services::{OtpService, PincodeService};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RegistrationStore>,
    pub otp_service: OtpService,
    pub pincode_service: PincodeService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn RegistrationStore>, config: AppConfig) -> Self {
        AppState {
            otp_service: OtpService::new(store.clone()),
            pincode_service: PincodeService::new(config.pincode_api_url.clone()),
            store,
            config: Arc::new(config),
        }
    }
}
