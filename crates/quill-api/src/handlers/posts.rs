//! Post handlers
//!
//! Endpoints for post CRUD and listing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use quill_service::dto::{
    CreatePostRequest, PaginatedResponse, PostResponse, UpdatePostRequest,
};
use quill_service::PostService;

use crate::extractors::{AuthUser, PostIdPath, PostListParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(&auth.user, request).await?;
    Ok(Created(Json(response)))
}

/// Get a post by ID (public, counts a view)
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id).await?;
    Ok(Json(response))
}

/// List posts with filters, sorting and pagination (public)
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> ApiResult<Json<PaginatedResponse<PostResponse>>> {
    let query = params.into_query()?;

    let service = PostService::new(state.service_context());
    let response = service.list_posts(&query).await?;
    Ok(Json(response))
}

/// Update an owned post
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.update_post(&auth.user, post_id, request).await?;
    Ok(Json(response))
}

/// Delete a post (owner, or staff with the delete-any capability)
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<NoContent> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    service.delete_post(&auth.user, post_id).await?;
    Ok(NoContent)
}
