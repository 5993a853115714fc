//! API request and response types
//!
//! Wire casing is camelCase to match the dashboard client (`fullName`,
//! `hiringDate`, `profilePic`, ...). Request payloads tolerate missing
//! fields at the serde level so the handlers can answer with a structured
//! validation error instead of a bare deserialization failure.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Registration request: full profile plus plaintext password
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    pub hiring_date: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User profile as returned by registration, login, and the profile routes.
///
/// Carries no field for the password hash, so no response can leak it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub qualification: String,
    pub department: String,
    pub position: String,
    pub hiring_date: NaiveDate,
    pub salary: Decimal,
    #[serde(rename = "profilePic")]
    pub avatar_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; `None` leaves a field unchanged.
///
/// Email and password are not updatable through this payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub qualification: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hiring_date: Option<NaiveDate>,
    pub salary: Option<Decimal>,
}
