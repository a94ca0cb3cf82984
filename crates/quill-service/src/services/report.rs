//! Report service - filing reports and moving them through the lifecycle
//!
//! A transition that carries a side effect (content removal, user ban) runs
//! the side effect first, then writes the status guarded by the expected
//! prior status. A failed side effect leaves the report untouched; a lost
//! guarded write surfaces as a conflict. There is never a terminal report
//! whose action did not happen.

use quill_core::entities::{
    ModerationAction, Report, ReportReason, ReportStatus, TargetType, User,
};
use quill_core::error::DomainError;
use quill_core::policy::{Capability, Ownership};
use quill_core::query::ReportQuery;
use quill_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateReportRequest, PaginatedResponse, ReportResponse, UpdateReportRequest};

use super::access;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::moderation::ModerationService;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a report against a post, comment, or user
    #[instrument(skip(self, principal, request), fields(reporter = %principal.id))]
    pub async fn create_report(
        &self,
        principal: &User,
        request: CreateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        access::require(principal, Capability::CreateReport, Ownership::NotApplicable)?;

        let target_type = TargetType::parse(&request.target_type).ok_or_else(|| {
            ServiceError::validation(format!("unknown target type: {}", request.target_type))
        })?;
        let reason = ReportReason::parse(&request.reason).ok_or_else(|| {
            ServiceError::validation(format!("unknown reason: {}", request.reason))
        })?;
        let target_id = Snowflake::parse(&request.target_id)
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if request.description.len() > Report::MAX_DESCRIPTION_LEN {
            return Err(DomainError::ContentTooLong {
                max: Report::MAX_DESCRIPTION_LEN,
            }
            .into());
        }

        // Reports against stored entities must point at something that exists
        match target_type {
            TargetType::Post => {
                self.ctx
                    .post_repo()
                    .find_by_id(target_id)
                    .await?
                    .ok_or(DomainError::PostNotFound(target_id))?;
            }
            TargetType::User => {
                self.ctx
                    .user_repo()
                    .find_by_id(target_id)
                    .await?
                    .ok_or(DomainError::UserNotFound(target_id))?;
            }
            TargetType::Comment => {}
        }

        let report = Report::new(
            self.ctx.generate_id(),
            principal.id,
            target_type,
            target_id,
            reason,
            request.description,
        );
        self.ctx.report_repo().create(&report).await?;

        info!(report_id = %report.id, "Report filed");
        Ok(ReportResponse::from(&report))
    }

    /// Read one report from the moderation queue
    #[instrument(skip(self, principal), fields(actor = %principal.id))]
    pub async fn get_report(&self, principal: &User, id: Snowflake) -> ServiceResult<ReportResponse> {
        access::require(principal, Capability::ReadAnyReport, Ownership::NotApplicable)?;

        let report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReportNotFound(id))?;
        Ok(ReportResponse::from(&report))
    }

    /// Filtered moderation queue listing
    #[instrument(skip(self, principal, query), fields(actor = %principal.id))]
    pub async fn list_reports(
        &self,
        principal: &User,
        query: &ReportQuery,
    ) -> ServiceResult<PaginatedResponse<ReportResponse>> {
        access::require(principal, Capability::ReadAnyReport, Ownership::NotApplicable)?;

        let page = self.ctx.report_repo().list(query).await?;
        Ok(PaginatedResponse::from_page(page, |report| {
            ReportResponse::from(&report)
        }))
    }

    /// Move a report through its lifecycle, dispatching the recorded action
    #[instrument(skip(self, principal, request), fields(actor = %principal.id, report_id = %id))]
    pub async fn update_report(
        &self,
        principal: &User,
        id: Snowflake,
        request: UpdateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        access::require(principal, Capability::UpdateReport, Ownership::NotApplicable)?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ReportNotFound(id))?;

        let next = ReportStatus::parse(&request.status).ok_or_else(|| {
            ServiceError::validation(format!("unknown status: {}", request.status))
        })?;
        let action = match &request.action_taken {
            Some(raw) => ModerationAction::parse(raw)
                .ok_or_else(|| ServiceError::validation(format!("unknown action: {raw}")))?,
            None => ModerationAction::None,
        };

        // Validate the move before touching anything
        let prior = report.status;
        report.transition(next, principal.id, action, request.review_notes.clone())?;

        // Side effect first. If it fails, the status write never happens.
        self.dispatch_action(principal, &report, action).await?;

        // Guarded status write; losing the guard means the report moved
        // concurrently between our read and this write.
        let written = self.ctx.report_repo().transition(&report, prior).await?;
        if !written {
            return Err(ServiceError::conflict(
                "report was updated concurrently, re-read and retry",
            ));
        }

        info!(status = %report.status, action = %report.action_taken, "Report transitioned");
        Ok(ReportResponse::from(&report))
    }

    /// Execute the side effect an action implies. Warnings and dismissals
    /// have none.
    async fn dispatch_action(
        &self,
        principal: &User,
        report: &Report,
        action: ModerationAction,
    ) -> ServiceResult<()> {
        let moderation = ModerationService::new(self.ctx);
        match action {
            ModerationAction::ContentRemoved => {
                moderation
                    .delete_content(
                        principal,
                        report.target_type,
                        report.target_id,
                        report.review_notes.as_deref(),
                    )
                    .await
            }
            ModerationAction::UserBanned => {
                let user_id = self.resolve_target_user(report).await?;
                moderation
                    .ban_user(principal, user_id, report.review_notes.as_deref())
                    .await
            }
            ModerationAction::None | ModerationAction::Warning | ModerationAction::Dismissed => {
                Ok(())
            }
        }
    }

    /// Find the user a ban action applies to: the reported user directly,
    /// or the owner of the reported post.
    async fn resolve_target_user(&self, report: &Report) -> ServiceResult<Snowflake> {
        match report.target_type {
            TargetType::User => Ok(report.target_id),
            TargetType::Post => {
                let post = self
                    .ctx
                    .post_repo()
                    .find_by_id(report.target_id)
                    .await?
                    .ok_or_else(|| {
                        ServiceError::conflict("reported post no longer exists, cannot resolve author")
                    })?;
                Ok(post.owner_id)
            }
            TargetType::Comment => Err(ServiceError::conflict(
                "cannot resolve a user to ban from a comment target",
            )),
        }
    }
}
