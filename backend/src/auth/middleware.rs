//! Session gate for protected routes
//!
//! Extractor-based: handlers that take [`AuthUser`] only run once the
//! inbound session cookie has been verified. Requests with no cookie or
//! a bad token are rejected with 401 before any handler code executes.

use crate::auth::cookie::SESSION_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

/// Authenticated user extracted from the session cookie
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // CookieJar extraction is infallible
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| ApiError::Unauthorized("Missing session cookie".to_string()))?;

        let user_id = app_state
            .tokens()
            .verify(&token)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        Ok(AuthUser { user_id })
    }
}
