//! Authentication extractor
//!
//! Validates the bearer token and loads the fresh principal from storage.
//! Role and ban state always come from the user repository, never from the
//! token claims.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use quill_core::entities::User;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated principal extracted from a JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Freshly loaded principal
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        // Load the principal; a valid token for a deleted user is rejected
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Domain)?
            .ok_or(ApiError::UnknownPrincipal)?;

        Ok(AuthUser { user })
    }
}
