//! Data access layer
//!
//! Repositories own the SQL; services above them own validation and
//! error mapping.

pub mod user;
