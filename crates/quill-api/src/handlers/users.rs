//! User handlers
//!
//! Endpoints for profile reads and admin role management.

use axum::{
    extract::{Path, State},
    Json,
};
use quill_service::dto::{CurrentUserResponse, UpdateRoleRequest, UserResponse};
use quill_service::UserService;

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user's own profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(&auth.user)?;
    Ok(Json(response))
}

/// Get a user's public profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Change a user's role (admin only)
///
/// PATCH /users/{user_id}/role
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    Json(request): Json<UpdateRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.update_role(&auth.user, user_id, request).await?;
    Ok(Json(response))
}
