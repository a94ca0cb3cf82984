//! Moderation action dispatcher
//!
//! Executes the concrete moderation side effects: content removal and
//! user bans. All operations here check the actor's capability and, for
//! bans, the strict rank ordering.

use quill_core::entities::{TargetType, User};
use quill_core::error::DomainError;
use quill_core::policy::{Capability, Ownership};
use quill_core::value_objects::Snowflake;
use tracing::{info, instrument};

use super::access;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Moderation action dispatcher
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Remove reported content. Deleting content that is already gone
    /// succeeds; the outcome is already satisfied.
    #[instrument(skip(self, principal), fields(actor = %principal.id, target = %target_id))]
    pub async fn delete_content(
        &self,
        principal: &User,
        target_type: TargetType,
        target_id: Snowflake,
        reason: Option<&str>,
    ) -> ServiceResult<()> {
        access::require(principal, Capability::DeleteAnyPost, Ownership::NotApplicable)?;

        match target_type {
            TargetType::Post => {
                let existed = self.ctx.post_repo().delete(target_id).await?;
                info!(existed, reason = reason.unwrap_or(""), "Content removed");
            }
            // Comments and user profiles have no stored content to remove
            TargetType::Comment | TargetType::User => {
                info!(target_type = %target_type, "No stored content for target, nothing to remove");
            }
        }

        Ok(())
    }

    /// Ban a user. Idempotent: re-banning refreshes `banned_by` and
    /// `ban_reason` to the latest action. The actor must strictly outrank
    /// the target; banning a moderator additionally needs the admin-level
    /// capability.
    #[instrument(skip(self, principal), fields(actor = %principal.id, target = %user_id))]
    pub async fn ban_user(
        &self,
        principal: &User,
        user_id: Snowflake,
        reason: Option<&str>,
    ) -> ServiceResult<()> {
        access::require(principal, Capability::BanUser, Ownership::NotApplicable)?;

        let target = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        access::require_ban_rank(principal, &target)?;
        if target.role.is_staff() {
            access::require(principal, Capability::BanModerator, Ownership::NotApplicable)?;
        }

        self.ctx.user_repo().set_ban(user_id, principal.id, reason).await?;
        info!("User banned");
        Ok(())
    }

    /// Lift a ban, clearing every ban field. Same capability and rank rules
    /// as banning.
    #[instrument(skip(self, principal), fields(actor = %principal.id, target = %user_id))]
    pub async fn unban_user(&self, principal: &User, user_id: Snowflake) -> ServiceResult<()> {
        access::require(principal, Capability::BanUser, Ownership::NotApplicable)?;

        let target = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        access::require_ban_rank(principal, &target)?;
        if target.role.is_staff() {
            access::require(principal, Capability::BanModerator, Ownership::NotApplicable)?;
        }

        self.ctx.user_repo().clear_ban(user_id).await?;
        info!("Ban lifted");
        Ok(())
    }
}
