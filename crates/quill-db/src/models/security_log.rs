//! Security log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use quill_core::entities::{SecurityEventType, SecurityLogEntry};
use quill_core::error::DomainError;
use quill_core::value_objects::Snowflake;

/// Database model for the security_logs table
#[derive(Debug, Clone, FromRow)]
pub struct SecurityLogModel {
    pub id: i64,
    pub event_type: String,
    pub ip: String,
    pub endpoint: String,
    pub user_id: Option<i64>,
    pub details: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<SecurityLogModel> for SecurityLogEntry {
    type Error = DomainError;

    fn try_from(model: SecurityLogModel) -> Result<Self, Self::Error> {
        let event_type = SecurityEventType::parse(&model.event_type).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "unknown event_type in security_logs row: {}",
                model.event_type
            ))
        })?;

        Ok(SecurityLogEntry {
            id: Snowflake::new(model.id),
            event_type,
            ip: model.ip,
            endpoint: model.endpoint,
            user_id: model.user_id.map(Snowflake::new),
            details: model.details,
            created_at: model.created_at,
        })
    }
}
