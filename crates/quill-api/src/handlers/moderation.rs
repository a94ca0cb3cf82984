//! Moderation handlers
//!
//! Endpoints for direct moderation actions outside the report flow.

use axum::{
    extract::{Path, State},
    Json,
};
use quill_service::dto::BanUserRequest;
use quill_service::ModerationService;

use crate::extractors::{AuthUser, ModerationTargetPath, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Delete content body
#[derive(Debug, serde::Deserialize, Default)]
pub struct DeleteContentBody {
    pub reason: Option<String>,
}

/// Remove reported content (staff only, idempotent)
///
/// DELETE /moderation/content/{target_type}/{target_id}
pub async fn delete_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ModerationTargetPath>,
    body: Option<Json<DeleteContentBody>>,
) -> ApiResult<NoContent> {
    let target_type = path.target_type()?;
    let target_id = path.target_id()?;
    let reason = body.and_then(|b| b.0.reason);

    let service = ModerationService::new(state.service_context());
    service
        .delete_content(&auth.user, target_type, target_id, reason.as_deref())
        .await?;
    Ok(NoContent)
}

/// Ban a user (idempotent, rank-checked)
///
/// PUT /moderation/bans/{user_id}
pub async fn ban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<BanUserRequest>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;

    let service = ModerationService::new(state.service_context());
    service
        .ban_user(&auth.user, user_id, request.reason.as_deref())
        .await?;
    Ok(NoContent)
}

/// Lift a user's ban (rank-checked)
///
/// DELETE /moderation/bans/{user_id}
pub async fn unban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;

    let service = ModerationService::new(state.service_context());
    service.unban_user(&auth.user, user_id).await?;
    Ok(NoContent)
}
