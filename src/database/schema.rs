//! SQL DDL for the registration store (Postgres).

/// - `otp_records.aadhaar` is the primary key, so one live OTP per aadhaar
/// - `registrations.aadhaar` is UNIQUE; a second insert is a constraint violation
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS otp_records (
    aadhaar TEXT PRIMARY KEY,
    otp TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS registrations (
    id BIGSERIAL PRIMARY KEY,
    aadhaar TEXT NOT NULL UNIQUE,
    pan TEXT NOT NULL,
    name TEXT NOT NULL,
    pincode TEXT NOT NULL,
    state TEXT NOT NULL,
    district TEXT NOT NULL,
    address TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
"#;

/// Splits the bundled DDL into individual statements.
pub fn statements() -> impl Iterator<Item = &'static str> {
    POSTGRES_INIT
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
