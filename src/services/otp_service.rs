use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::database::RegistrationStore;
use crate::errors::Result;

#[derive(Clone)]
pub struct OtpService {
    store: Arc<dyn RegistrationStore>,
}

impl OtpService {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self { store }
    }

    // Uniform over 100000..=999999, so never a leading zero
    pub fn generate_otp() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..=999_999u32).to_string()
    }

    /// Issues a fresh OTP for `aadhaar`, invalidating any earlier one.
    ///
    /// The value is logged in plaintext; there is no delivery channel yet.
    pub async fn issue(&self, aadhaar: &str) -> Result<String> {
        let otp = Self::generate_otp();
        self.store.upsert_otp(aadhaar, &otp).await?;
        info!(%aadhaar, %otp, "OTP issued");
        Ok(otp)
    }

    /// Consumes the OTP if it matches. A second call with the same value fails.
    pub async fn verify(&self, aadhaar: &str, otp: &str) -> Result<bool> {
        let verified = self.store.consume_otp(aadhaar, otp).await?;
        debug!(verified, "OTP verification attempt");
        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;

    #[test]
    fn generated_otp_is_six_digits() {
        for _ in 0..1_000 {
            let otp = OtpService::generate_otp();
            assert_eq!(otp.len(), 6);
            let n: u32 = otp.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }

    #[tokio::test]
    async fn issued_otp_verifies_once() {
        let store = Arc::new(MemoryStore::new());
        let service = OtpService::new(store.clone());

        let otp = service.issue("123456789012").await.unwrap();
        assert_eq!(store.find_otp("123456789012").await.unwrap().unwrap().otp, otp);

        assert!(service.verify("123456789012", &otp).await.unwrap());
        assert!(!service.verify("123456789012", &otp).await.unwrap());
    }
}
