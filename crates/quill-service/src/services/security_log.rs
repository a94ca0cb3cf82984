//! Security log service - admin-only reads of the append-only store

use quill_core::entities::User;
use quill_core::policy::{Capability, Ownership};
use quill_core::query::SecurityLogQuery;
use tracing::instrument;

use crate::dto::{PaginatedResponse, SecurityLogResponse};

use super::access;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Security log service
pub struct SecurityLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SecurityLogService<'a> {
    /// Create a new SecurityLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filtered, paginated listing of security events
    #[instrument(skip(self, principal, query), fields(actor = %principal.id))]
    pub async fn list(
        &self,
        principal: &User,
        query: &SecurityLogQuery,
    ) -> ServiceResult<PaginatedResponse<SecurityLogResponse>> {
        access::require(principal, Capability::ReadSecurityLogs, Ownership::NotApplicable)?;

        let page = self.ctx.security_log_repo().list(query).await?;
        Ok(PaginatedResponse::from_page(page, |entry| {
            SecurityLogResponse::from(&entry)
        }))
    }
}
