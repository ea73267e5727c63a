use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::{AppError, Result};
use crate::models::{NewRegistration, OtpRecord, Registration};

use super::RegistrationStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for PgStore {
    /// Uses `INSERT ... ON CONFLICT(aadhaar) DO UPDATE`; concurrent issues resolve last-write-wins.
    async fn upsert_otp(&self, aadhaar: &str, otp: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO otp_records (aadhaar, otp) VALUES ($1, $2)
            ON CONFLICT (aadhaar) DO UPDATE SET otp = EXCLUDED.otp
            "#,
        )
        .bind(aadhaar)
        .bind(otp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_otp(&self, aadhaar: &str) -> Result<Option<OtpRecord>> {
        let record = sqlx::query_as::<_, OtpRecord>(
            "SELECT aadhaar, otp FROM otp_records WHERE aadhaar = $1",
        )
        .bind(aadhaar)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn consume_otp(&self, aadhaar: &str, otp: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM otp_records WHERE aadhaar = $1 AND otp = $2")
            .bind(aadhaar)
            .bind(otp)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn create_registration(&self, new: NewRegistration) -> Result<Registration> {
        sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (aadhaar, pan, name, pincode, state, district, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, aadhaar, pan, name, pincode, state, district, address, created_at
            "#,
        )
        .bind(new.aadhaar)
        .bind(new.pan)
        .bind(new.name)
        .bind(new.pincode)
        .bind(new.state)
        .bind(new.district)
        .bind(new.address)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_store)
    }

    async fn find_registration(&self, aadhaar: &str) -> Result<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"SELECT id, aadhaar, pan, name, pincode, state, district, address, created_at
               FROM registrations WHERE aadhaar = $1"#,
        )
        .bind(aadhaar)
        .fetch_optional(&self.pool)
        .await?;
        Ok(registration)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
