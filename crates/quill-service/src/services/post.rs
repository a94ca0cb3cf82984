//! Post service - owner CRUD, public reads, and the filtered listing

use quill_core::entities::{Post, PostCategory, User};
use quill_core::error::DomainError;
use quill_core::policy::{Capability, Ownership};
use quill_core::query::PostQuery;
use quill_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PaginatedResponse, PostResponse, UpdatePostRequest};

use super::access;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post owned by the principal
    #[instrument(skip(self, principal, request), fields(owner = %principal.id))]
    pub async fn create_post(
        &self,
        principal: &User,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        access::require(principal, Capability::CreatePost, Ownership::NotApplicable)?;

        let category = PostCategory::parse(&request.category).ok_or_else(|| {
            ServiceError::validation(format!("unknown category: {}", request.category))
        })?;

        let post = Post::new(
            self.ctx.generate_id(),
            principal.id,
            request.title,
            request.content,
            category,
        );
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, "Post created");
        Ok(PostResponse::from(&post))
    }

    /// Public read; bumps the view counter
    #[instrument(skip(self))]
    pub async fn get_post(&self, id: Snowflake) -> ServiceResult<PostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        self.ctx.post_repo().increment_views(id).await?;
        post.views += 1;

        Ok(PostResponse::from(&post))
    }

    /// Public filtered listing
    #[instrument(skip(self, query))]
    pub async fn list_posts(&self, query: &PostQuery) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let page = self.ctx.post_repo().list(query).await?;
        Ok(PaginatedResponse::from_page(page, |post| {
            PostResponse::from(&post)
        }))
    }

    /// Update a post. Only the owner may edit; there is no edit-any
    /// capability for staff.
    #[instrument(skip(self, principal, request), fields(actor = %principal.id, post_id = %id))]
    pub async fn update_post(
        &self,
        principal: &User,
        id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        if !post.is_owned_by(principal.id) {
            return Err(DomainError::NotOwner.into());
        }
        access::require(principal, Capability::EditOwnPost, Ownership::Owner)?;

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(content) = request.content {
            post.content = content;
        }
        if let Some(raw) = request.category {
            post.category = PostCategory::parse(&raw)
                .ok_or_else(|| ServiceError::validation(format!("unknown category: {raw}")))?;
        }

        self.ctx.post_repo().update(&post).await?;
        Ok(PostResponse::from(&post))
    }

    /// Delete a post. The owner always may; otherwise the delete-any
    /// capability (moderator and above) is required.
    #[instrument(skip(self, principal), fields(actor = %principal.id, post_id = %id))]
    pub async fn delete_post(&self, principal: &User, id: Snowflake) -> ServiceResult<()> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        if post.is_owned_by(principal.id) {
            access::require(principal, Capability::DeleteOwnPost, Ownership::Owner)?;
        } else {
            access::require(principal, Capability::DeleteAnyPost, Ownership::NotOwner)?;
        }

        self.ctx.post_repo().delete(id).await?;
        info!("Post deleted");
        Ok(())
    }
}
