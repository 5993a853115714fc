//! User service for registration, login and profile management
//!
//! Owns request validation and the mapping from storage results to API
//! errors. Password hashing and verification run on the blocking thread
//! pool.

use crate::auth::{PasswordService, TokenIssuer};
use crate::error::ApiError;
use crate::repositories::user::{NewUser, UpdateUserProfile, UserRecord, UserRepository};
use sqlx::PgPool;
use staffdesk_shared::types::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile};
use staffdesk_shared::{check_required, placeholder_avatar, validate_email};
use uuid::Uuid;

/// User service for account and profile operations
pub struct UserService;

impl UserService {
    /// Register a new employee account
    ///
    /// Every field is mandatory. The submitted password is hashed with a
    /// random salt before anything touches the database, and the stored
    /// hash never leaves this layer.
    pub async fn register(
        pool: &PgPool,
        request: RegisterRequest,
    ) -> Result<UserProfile, ApiError> {
        Self::validate_registration(&request)?;

        if UserRepository::email_exists(pool, &request.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Guaranteed present by validation
        let (Some(date_of_birth), Some(hiring_date), Some(salary)) =
            (request.dob, request.hiring_date, request.salary)
        else {
            return Err(ApiError::Validation("All fields are required".to_string()));
        };

        let password_hash = PasswordService::hash_async(request.password)
            .await
            .map_err(ApiError::Internal)?;

        let avatar_url = placeholder_avatar(&request.full_name);

        let user = NewUser {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            date_of_birth,
            gender: request.gender,
            qualification: request.qualification,
            department: request.department,
            position: request.position,
            hiring_date,
            salary,
            avatar_url,
            password_hash,
        };

        // The unique index still catches a concurrent registration that
        // slipped past the existence check
        let record = UserRepository::create(pool, &user)
            .await
            .map_err(Self::conflict_on_unique)?;

        Ok(Self::profile_from_record(record))
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password are reported distinctly: the
    /// former is a 404, the latter a 401. On success the caller receives
    /// the profile and a freshly minted session token.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenIssuer,
        request: LoginRequest,
    ) -> Result<(UserProfile, String), ApiError> {
        check_required(&[
            ("email", !request.email.trim().is_empty()),
            ("password", !request.password.is_empty()),
        ])
        .map_err(ApiError::Validation)?;

        let user = UserRepository::find_by_email(pool, &request.email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let valid = PasswordService::verify_async(request.password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid password".to_string()));
        }

        let token = tokens.issue(user.id).map_err(ApiError::Internal)?;

        Ok((Self::profile_from_record(user), token))
    }

    /// Get a user's profile
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(Self::profile_from_record(user))
    }

    /// Update the mutable profile fields
    ///
    /// Absent fields are left unchanged; provided fields must not be
    /// blank.
    pub async fn update_profile(
        pool: &PgPool,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        Self::validate_profile_update(&request)?;

        let updates = UpdateUserProfile {
            full_name: request.full_name,
            phone: request.phone,
            date_of_birth: request.dob,
            gender: request.gender,
            qualification: request.qualification,
            department: request.department,
            position: request.position,
            hiring_date: request.hiring_date,
            salary: request.salary,
        };

        let user = UserRepository::update_profile(pool, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(Self::profile_from_record(user))
    }

    /// Check that every registration field is present and the email is
    /// well formed
    fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
        check_required(&[
            ("fullName", !request.full_name.trim().is_empty()),
            ("email", !request.email.trim().is_empty()),
            ("phone", !request.phone.trim().is_empty()),
            ("dob", request.dob.is_some()),
            ("gender", !request.gender.trim().is_empty()),
            ("qualification", !request.qualification.trim().is_empty()),
            ("department", !request.department.trim().is_empty()),
            ("position", !request.position.trim().is_empty()),
            ("hiringDate", request.hiring_date.is_some()),
            ("salary", request.salary.is_some()),
            ("password", !request.password.is_empty()),
        ])
        .map_err(ApiError::Validation)?;

        validate_email(&request.email).map_err(ApiError::Validation)?;

        Ok(())
    }

    /// Reject updates that set a provided text field to blank
    fn validate_profile_update(request: &UpdateProfileRequest) -> Result<(), ApiError> {
        let blank: Vec<&'static str> = [
            ("fullName", request.full_name.as_deref()),
            ("phone", request.phone.as_deref()),
            ("gender", request.gender.as_deref()),
            ("qualification", request.qualification.as_deref()),
            ("department", request.department.as_deref()),
            ("position", request.position.as_deref()),
        ]
        .into_iter()
        .filter(|(_, value)| matches!(value, Some(s) if s.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if !blank.is_empty() {
            return Err(ApiError::Validation(format!(
                "Fields cannot be empty: {}",
                blank.join(", ")
            )));
        }

        Ok(())
    }

    /// Map a unique-violation insert failure to a conflict
    fn conflict_on_unique(err: anyhow::Error) -> ApiError {
        if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
            if db_err.is_unique_violation() {
                return ApiError::Conflict("Email already registered".to_string());
            }
        }
        ApiError::Internal(err)
    }

    /// Build the outward profile, dropping credential material
    fn profile_from_record(user: UserRecord) -> UserProfile {
        UserProfile {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            dob: user.date_of_birth,
            gender: user.gender,
            qualification: user.qualification,
            department: user.department,
            position: user.position,
            hiring_date: user.hiring_date,
            salary: user.salary,
            avatar_url: user.avatar_url,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn complete_registration() -> RegisterRequest {
        RegisterRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@gmail.com".to_string(),
            phone: "9876543210".to_string(),
            dob: NaiveDate::from_ymd_opt(1998, 4, 12),
            gender: "Female".to_string(),
            qualification: "MBA".to_string(),
            department: "Human Resources".to_string(),
            position: "HR Manager".to_string(),
            hiring_date: NaiveDate::from_ymd_opt(2022, 1, 15),
            salary: Some(Decimal::new(5500000, 2)),
            password: "secret1".to_string(),
        }
    }

    fn sample_record() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            full_name: "Jane Doe".to_string(),
            email: "jane@gmail.com".to_string(),
            phone: "9876543210".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1998, 4, 12).unwrap(),
            gender: "Female".to_string(),
            qualification: "MBA".to_string(),
            department: "Human Resources".to_string(),
            position: "HR Manager".to_string(),
            hiring_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
            salary: Decimal::new(5500000, 2),
            avatar_url: "https://placehold.co/600x400?text=J".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            status: "Active".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_complete_registration_passes_validation() {
        assert!(UserService::validate_registration(&complete_registration()).is_ok());
    }

    #[test]
    fn test_missing_password_rejected() {
        let mut request = complete_registration();
        request.password = String::new();

        match UserService::validate_registration(&request) {
            Err(ApiError::Validation(msg)) => {
                assert!(msg.starts_with("All fields are required"));
                assert!(msg.contains("password"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_blank_full_name_rejected() {
        let mut request = complete_registration();
        request.full_name = "   ".to_string();

        match UserService::validate_registration(&request) {
            Err(ApiError::Validation(msg)) => assert!(msg.contains("fullName")),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_dates_and_salary_rejected() {
        let mut request = complete_registration();
        request.dob = None;
        request.hiring_date = None;
        request.salary = None;

        match UserService::validate_registration(&request) {
            Err(ApiError::Validation(msg)) => {
                assert!(msg.contains("dob"));
                assert!(msg.contains("hiringDate"));
                assert!(msg.contains("salary"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = complete_registration();
        request.email = "not-an-email".to_string();

        match UserService::validate_registration(&request) {
            Err(ApiError::Validation(msg)) => assert_eq!(msg, "Invalid email format"),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_profile_update_is_allowed() {
        let request = UpdateProfileRequest::default();
        assert!(UserService::validate_profile_update(&request).is_ok());
    }

    #[test]
    fn test_blank_profile_update_field_rejected() {
        let request = UpdateProfileRequest {
            full_name: Some("  ".to_string()),
            ..Default::default()
        };

        match UserService::validate_profile_update(&request) {
            Err(ApiError::Validation(msg)) => assert!(msg.contains("fullName")),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_profile_drops_credential_material() {
        let record = sample_record();
        let hash = record.password_hash.clone();

        let profile = UserService::profile_from_record(record);
        let json = serde_json::to_string(&profile).unwrap();

        assert!(!json.contains(&hash));
        assert!(!json.contains("password"));
        assert_eq!(profile.status, "Active");
        assert_eq!(profile.avatar_url, "https://placehold.co/600x400?text=J");
    }
}
