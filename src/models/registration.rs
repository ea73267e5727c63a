use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const UDYAM_PREFIX: &str = "UDYAM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: i64,
    pub aadhaar: String,
    pub pan: String,
    pub name: String,
    pub pincode: String,
    pub state: String,
    pub district: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a registration before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub aadhaar: String,
    pub pan: String,
    pub name: String,
    pub pincode: String,
    pub state: String,
    pub district: String,
    pub address: String,
}

impl Registration {
    /// Display identifier handed back to the client: `UDYAM-<unix millis>-<id>`.
    pub fn udyam_number(&self, issued_at: DateTime<Utc>) -> String {
        format!(
            "{}-{}-{}",
            UDYAM_PREFIX,
            issued_at.timestamp_millis(),
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn udyam_number_joins_prefix_timestamp_and_id() {
        let issued_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let registration = Registration {
            id: 42,
            aadhaar: "123456789012".into(),
            pan: "ABCDE1234F".into(),
            name: "Test User".into(),
            pincode: "123456".into(),
            state: "TS".into(),
            district: "TD".into(),
            address: "Addr".into(),
            created_at: issued_at,
        };
        assert_eq!(
            registration.udyam_number(issued_at),
            "UDYAM-1700000000123-42"
        );
    }
}
