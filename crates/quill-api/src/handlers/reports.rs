//! Report handlers
//!
//! Endpoints for filing reports and working the moderation queue.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use quill_service::dto::{
    CreateReportRequest, PaginatedResponse, ReportResponse, UpdateReportRequest,
};
use quill_service::ReportService;

use crate::extractors::{AuthUser, ReportIdPath, ReportListParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// File a report
///
/// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.create_report(&auth.user, request).await?;
    Ok(Created(Json(response)))
}

/// Get a report by ID (staff only)
///
/// GET /reports/{report_id}
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReportIdPath>,
) -> ApiResult<Json<ReportResponse>> {
    let report_id = path.report_id()?;

    let service = ReportService::new(state.service_context());
    let response = service.get_report(&auth.user, report_id).await?;
    Ok(Json(response))
}

/// List the report queue with filters (staff only)
///
/// GET /reports
pub async fn list_reports(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ReportListParams>,
) -> ApiResult<Json<PaginatedResponse<ReportResponse>>> {
    let query = params.into_query()?;

    let service = ReportService::new(state.service_context());
    let response = service.list_reports(&auth.user, &query).await?;
    Ok(Json(response))
}

/// Transition a report, dispatching any terminal moderation action
///
/// PATCH /reports/{report_id}
pub async fn update_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReportIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let report_id = path.report_id()?;

    let service = ReportService::new(state.service_context());
    let response = service.update_report(&auth.user, report_id, request).await?;
    Ok(Json(response))
}
