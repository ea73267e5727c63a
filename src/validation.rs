//! Form validation for the two registration steps.
//!
//! Both functions are pure: failures come back as values, never as errors.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dtos::{BusinessStep, IdentityStep};

pub static AADHAAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
pub static PAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());
pub static PINCODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());
pub static NOT_BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S").unwrap());

/// Returns the first problem with the aadhaar number, if any.
pub fn validate_step1(step: &IdentityStep) -> Option<String> {
    let errors = step.validate().err()?;
    collect_messages(&errors).remove("aadhaar")
}

/// Returns one message per invalid field; an empty map means the step is valid.
pub fn validate_step2(step: &BusinessStep) -> BTreeMap<String, String> {
    match step.validate() {
        Ok(()) => BTreeMap::new(),
        Err(errors) => collect_messages(&errors),
    }
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_RE.is_match(pincode)
}

fn collect_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), first_message(errs)))
        .collect()
}

// An empty value trips both the length and the pattern rule; report it as missing.
fn first_message(errs: &[ValidationError]) -> String {
    errs.iter()
        .find(|e| e.code == "length")
        .or_else(|| errs.first())
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Invalid value".to_string())
}
