//! User service - profile reads and admin role management

use quill_core::entities::User;
use quill_core::error::DomainError;
use quill_core::policy::{Capability, Ownership};
use quill_core::value_objects::{Role, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, UpdateRoleRequest, UserResponse};

use super::access;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current user profile (`/users/@me`)
    #[instrument(skip(self, principal), fields(user_id = %principal.id))]
    pub fn me(&self, principal: &User) -> ServiceResult<CurrentUserResponse> {
        access::require(principal, Capability::ReadOwnProfile, Ownership::Owner)?;
        Ok(CurrentUserResponse::from(principal))
    }

    /// Public user lookup
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;
        Ok(UserResponse::from(&user))
    }

    /// Change a user's role. Admin only; an admin cannot change their own
    /// role, so the last admin can never demote themselves by accident.
    #[instrument(skip(self, principal), fields(actor = %principal.id, target = %target_id))]
    pub async fn update_role(
        &self,
        principal: &User,
        target_id: Snowflake,
        request: UpdateRoleRequest,
    ) -> ServiceResult<UserResponse> {
        access::require(principal, Capability::ManageRoles, Ownership::NotApplicable)?;

        let role = Role::parse(&request.role)
            .ok_or_else(|| ServiceError::validation(format!("unknown role: {}", request.role)))?;

        if principal.id == target_id {
            return Err(DomainError::PolicyViolation(
                "cannot change own role".to_string(),
            )
            .into());
        }

        let mut target = self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or(DomainError::UserNotFound(target_id))?;

        self.ctx.user_repo().update_role(target_id, role).await?;
        target.set_role(role);

        info!(role = %role, "Role changed");
        Ok(UserResponse::from(&target))
    }
}
