//! Persistence for OTP records and registrations.
//!
//! Layout:
//! - `schema.rs`: SQL DDL applied at startup
//! - `connection.rs`: pool construction
//! - `postgres.rs`: the production store
//! - `memory.rs`: an in-process store with the same semantics

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{NewRegistration, OtpRecord, Registration};

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod schema;

pub use connection::get_db_pool;
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Inserts the OTP for `aadhaar`, replacing any previous one.
    async fn upsert_otp(&self, aadhaar: &str, otp: &str) -> Result<()>;

    /// Inspection helper; the request handlers never read OTPs back.
    async fn find_otp(&self, aadhaar: &str) -> Result<Option<OtpRecord>>;

    /// Deletes the record only when `otp` matches the stored value exactly.
    /// Returns whether a record was consumed.
    async fn consume_otp(&self, aadhaar: &str, otp: &str) -> Result<bool>;

    /// Fails with [`crate::errors::AppError::DuplicateKey`] when the aadhaar is already registered.
    async fn create_registration(&self, new: NewRegistration) -> Result<Registration>;

    /// Inspection helper for checking stored rows; no endpoint reads registrations.
    async fn find_registration(&self, aadhaar: &str) -> Result<Option<Registration>>;

    /// Releases the underlying connections.
    async fn close(&self);
}
