//! User profile routes
//!
//! Profile reads and updates for the authenticated user. Both routes sit
//! behind the session gate via the [`AuthUser`] extractor.

use crate::auth::AuthUser;
use crate::error::{ApiResult, AppJson};
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use staffdesk_shared::types::{UpdateProfileRequest, UserProfile};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// Get the authenticated user's profile
///
/// GET /user/profile
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::get_profile(&state.db, auth_user.user_id).await?;
    Ok(Json(profile))
}

/// Update the authenticated user's profile
///
/// PUT /user/profile
///
/// Only the provided fields change; email, password and status are not
/// editable here.
async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::update_profile(&state.db, auth_user.user_id, req).await?;
    Ok(Json(profile))
}
