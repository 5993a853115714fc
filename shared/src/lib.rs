//! Staffdesk Shared Library
//!
//! This crate contains the wire types and pure helpers shared between the
//! backend and its integration tests: request/response payloads, request
//! validation, and placeholder-avatar synthesis.

pub mod avatar;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use avatar::placeholder_avatar;
pub use types::*;
pub use validation::{check_required, validate_email};
