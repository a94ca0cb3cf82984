//! Report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use quill_core::entities::{ModerationAction, Report, ReportReason, ReportStatus, TargetType};
use quill_core::error::DomainError;
use quill_core::value_objects::Snowflake;

/// Database model for the reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub reporter_id: i64,
    pub target_type: String,
    pub target_id: i64,
    pub reason: String,
    pub description: String,
    pub status: String,
    pub action_taken: String,
    pub review_notes: Option<String>,
    pub reviewer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn bad_column(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("unknown {column} in reports row: {value}"))
}

impl TryFrom<ReportModel> for Report {
    type Error = DomainError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let target_type = TargetType::parse(&model.target_type)
            .ok_or_else(|| bad_column("target_type", &model.target_type))?;
        let reason = ReportReason::parse(&model.reason)
            .ok_or_else(|| bad_column("reason", &model.reason))?;
        let status = ReportStatus::parse(&model.status)
            .ok_or_else(|| bad_column("status", &model.status))?;
        let action_taken = ModerationAction::parse(&model.action_taken)
            .ok_or_else(|| bad_column("action_taken", &model.action_taken))?;

        Ok(Report {
            id: Snowflake::new(model.id),
            reporter_id: Snowflake::new(model.reporter_id),
            target_type,
            target_id: Snowflake::new(model.target_id),
            reason,
            description: model.description,
            status,
            action_taken,
            review_notes: model.review_notes,
            reviewer_id: model.reviewer_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
