//! Backend for the Udyam business registration flow.
//!
//! A client verifies an aadhaar number with a one-time passcode, then submits
//! the registration form, which is validated and stored in Postgres. The
//! server also hosts the prebuilt client bundle.

pub mod config;
pub mod database;
pub mod dtos;
pub mod errors;
mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use errors::{AppError, Result};
pub use routes::build_router;
pub use state::AppState;
