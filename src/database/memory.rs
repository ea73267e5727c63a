use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{AppError, Result};
use crate::models::{NewRegistration, OtpRecord, Registration};

use super::RegistrationStore;

/// In-process store with the same keying rules as the Postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    otps: HashMap<String, OtpRecord>,
    registrations: HashMap<String, Registration>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration_count(&self) -> usize {
        self.tables().registrations.len()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn upsert_otp(&self, aadhaar: &str, otp: &str) -> Result<()> {
        self.tables().otps.insert(
            aadhaar.to_string(),
            OtpRecord {
                aadhaar: aadhaar.to_string(),
                otp: otp.to_string(),
            },
        );
        Ok(())
    }

    async fn find_otp(&self, aadhaar: &str) -> Result<Option<OtpRecord>> {
        Ok(self.tables().otps.get(aadhaar).cloned())
    }

    async fn consume_otp(&self, aadhaar: &str, otp: &str) -> Result<bool> {
        let mut tables = self.tables();
        match tables.otps.get(aadhaar) {
            Some(record) if record.otp == otp => {
                tables.otps.remove(aadhaar);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn create_registration(&self, new: NewRegistration) -> Result<Registration> {
        let mut tables = self.tables();
        if tables.registrations.contains_key(&new.aadhaar) {
            return Err(AppError::DuplicateKey);
        }

        tables.next_id += 1;
        let registration = Registration {
            id: tables.next_id,
            aadhaar: new.aadhaar,
            pan: new.pan,
            name: new.name,
            pincode: new.pincode,
            state: new.state,
            district: new.district,
            address: new.address,
            created_at: Utc::now(),
        };
        tables
            .registrations
            .insert(registration.aadhaar.clone(), registration.clone());
        Ok(registration)
    }

    async fn find_registration(&self, aadhaar: &str) -> Result<Option<Registration>> {
        Ok(self.tables().registrations.get(aadhaar).cloned())
    }

    async fn close(&self) {}
}
