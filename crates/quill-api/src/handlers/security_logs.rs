//! Security log handlers
//!
//! Read-only access to the append-only security event store (admin only).

use axum::{
    extract::{Query, State},
    Json,
};
use quill_service::dto::{PaginatedResponse, SecurityLogResponse};
use quill_service::SecurityLogService;

use crate::extractors::{AuthUser, SecurityLogListParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// List security log entries with filters
///
/// GET /security-logs
pub async fn list_security_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SecurityLogListParams>,
) -> ApiResult<Json<PaginatedResponse<SecurityLogResponse>>> {
    let query = params.into_query()?;

    let service = SecurityLogService::new(state.service_context());
    let response = service.list(&auth.user, &query).await?;
    Ok(Json(response))
}
