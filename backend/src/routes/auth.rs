//! Authentication routes
//!
//! Registration, login and logout. Login plants the HTTP-only session
//! cookie; logout replaces it with an immediately expiring one.

use crate::auth::{clear_session_cookie, session_cookie};
use crate::error::{ApiResult, AppJson};
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::CookieJar;
use staffdesk_shared::types::{LoginRequest, RegisterRequest, UserProfile};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Register a new employee account
///
/// POST /auth/register
///
/// Returns the created profile. Registration does not start a session;
/// the client logs in afterwards.
async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::register(&state.db, req).await?;
    Ok(Json(profile))
}

/// Login with email and password
///
/// POST /auth/login
///
/// On success the body carries the profile and the response sets the
/// session cookie.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<UserProfile>)> {
    let (profile, token) = UserService::login(&state.db, state.tokens(), req).await?;
    let jar = jar.add(session_cookie(token, &state.config().session));

    Ok((jar, Json(profile)))
}

/// Logout by clearing the session cookie
///
/// POST /auth/logout
///
/// Tokens stay stateless, so logout is purely a cookie removal; an
/// already logged-out client gets the same 204.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.add(clear_session_cookie()), StatusCode::NO_CONTENT)
}
