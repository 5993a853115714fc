//! Input validation functions
//!
//! Registration and login validate field presence here; email format is
//! checked with the `validator` crate. Format rules beyond these (phone
//! patterns, password policy) belong to the client and are not enforced
//! server-side.

use validator::ValidateEmail;

/// Collect the names of required fields that are absent or empty.
///
/// Each entry pairs a wire-level field name with whether a usable value
/// was supplied. The caller decides what "usable" means per field
/// (non-blank string, `Some` date, positive amount, ...).
pub fn missing_fields(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

/// Check a required-field table, producing the validation message used by
/// the registration and login endpoints.
pub fn check_required(fields: &[(&'static str, bool)]) -> Result<(), String> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "All fields are required; missing: {}",
            missing.join(", ")
        ))
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}
