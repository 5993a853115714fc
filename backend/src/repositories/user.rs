//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub qualification: String,
    pub department: String,
    pub position: String,
    pub hiring_date: NaiveDate,
    pub salary: Decimal,
    pub avatar_url: String,
    pub password_hash: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
///
/// `id`, `status` and the timestamps come from column defaults.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub qualification: String,
    pub department: String,
    pub position: String,
    pub hiring_date: NaiveDate,
    pub salary: Decimal,
    pub avatar_url: String,
    pub password_hash: String,
}

/// Input for updating the mutable profile fields
///
/// Email, credential material and status are not updatable here.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub qualification: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hiring_date: Option<NaiveDate>,
    pub salary: Option<Decimal>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    ///
    /// Fails with a unique violation if the email is already taken; the
    /// service layer maps that to a conflict.
    pub async fn create(pool: &PgPool, user: &NewUser) -> Result<UserRecord> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (
                full_name, email, phone, date_of_birth, gender, qualification,
                department, position, hiring_date, salary, avatar_url, password_hash
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, full_name, email, phone, date_of_birth, gender,
                      qualification, department, position, hiring_date, salary,
                      avatar_url, password_hash, status, created_at, updated_at
            "#,
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(user.date_of_birth)
        .bind(&user.gender)
        .bind(&user.qualification)
        .bind(&user.department)
        .bind(&user.position)
        .bind(user.hiring_date)
        .bind(user.salary)
        .bind(&user.avatar_url)
        .bind(&user.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, full_name, email, phone, date_of_birth, gender,
                   qualification, department, position, hiring_date, salary,
                   avatar_url, password_hash, status, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, full_name, email, phone, date_of_birth, gender,
                   qualification, department, position, hiring_date, salary,
                   avatar_url, password_hash, status, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Update profile fields, leaving absent ones unchanged
    ///
    /// Returns `None` when no user with that id exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateUserProfile,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET
                full_name = COALESCE($2, full_name),
                phone = COALESCE($3, phone),
                date_of_birth = COALESCE($4, date_of_birth),
                gender = COALESCE($5, gender),
                qualification = COALESCE($6, qualification),
                department = COALESCE($7, department),
                position = COALESCE($8, position),
                hiring_date = COALESCE($9, hiring_date),
                salary = COALESCE($10, salary),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, full_name, email, phone, date_of_birth, gender,
                      qualification, department, position, hiring_date, salary,
                      avatar_url, password_hash, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(updates.full_name)
        .bind(updates.phone)
        .bind(updates.date_of_birth)
        .bind(updates.gender)
        .bind(updates.qualification)
        .bind(updates.department)
        .bind(updates.position)
        .bind(updates.hiring_date)
        .bind(updates.salary)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}
