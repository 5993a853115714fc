//! Session cookie construction
//!
//! The session token travels in an HTTP-only cookie so browser scripts
//! never see it. `Secure` is configuration-driven: local development
//! runs over plain HTTP, production must not.

use crate::config::SessionConfig;
use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "sd_session";

/// Build the session cookie carrying a freshly minted token
pub fn session_cookie(token: String, session: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(session.cookie_secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::seconds(session.ttl_secs))
        .build()
}

/// Build the expired cookie that clears an existing session on logout
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
