//! Placeholder avatar synthesis
//!
//! New accounts get a generated placeholder image keyed on the first
//! letter of the full name, upper-cased.

/// Base URL of the placeholder image service
const AVATAR_BASE_URL: &str = "https://placehold.co/600x400";

/// Build the placeholder avatar URL for a full name.
pub fn placeholder_avatar(full_name: &str) -> String {
    let initial: String = full_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    format!("{AVATAR_BASE_URL}?text={initial}")
}
