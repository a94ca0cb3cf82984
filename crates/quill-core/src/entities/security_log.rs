//! Security log entry - append-only audit record
//!
//! Entries are written through the fire-and-forget audit channel and never
//! mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

use crate::value_objects::Snowflake;

/// Closed set of security-relevant event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityEventType {
    AuthSuccess,
    AuthFailure,
    AuthLockout,
    UnauthorizedAccess,
    RateLimitExceeded,
    InvalidInput,
    FileUploadBlocked,
    SuspiciousActivity,
}

impl SecurityEventType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthSuccess => "AUTH_SUCCESS",
            Self::AuthFailure => "AUTH_FAILURE",
            Self::AuthLockout => "AUTH_LOCKOUT",
            Self::UnauthorizedAccess => "UNAUTHORIZED_ACCESS",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::InvalidInput => "INVALID_INPUT",
            Self::FileUploadBlocked => "FILE_UPLOAD_BLOCKED",
            Self::SuspiciousActivity => "SUSPICIOUS_ACTIVITY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AUTH_SUCCESS" => Some(Self::AuthSuccess),
            "AUTH_FAILURE" => Some(Self::AuthFailure),
            "AUTH_LOCKOUT" => Some(Self::AuthLockout),
            "UNAUTHORIZED_ACCESS" => Some(Self::UnauthorizedAccess),
            "RATE_LIMIT_EXCEEDED" => Some(Self::RateLimitExceeded),
            "INVALID_INPUT" => Some(Self::InvalidInput),
            "FILE_UPLOAD_BLOCKED" => Some(Self::FileUploadBlocked),
            "SUSPICIOUS_ACTIVITY" => Some(Self::SuspiciousActivity),
            _ => None,
        }
    }
}

impl fmt::Display for SecurityEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One append-only security event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityLogEntry {
    pub id: Snowflake,
    pub event_type: SecurityEventType,
    pub ip: String,
    pub endpoint: String,
    pub user_id: Option<Snowflake>,
    pub details: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

impl SecurityLogEntry {
    pub fn new(
        id: Snowflake,
        event_type: SecurityEventType,
        ip: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            id,
            event_type,
            ip: ip.into(),
            endpoint: endpoint.into(),
            user_id: None,
            details: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_user(mut self, user_id: Snowflake) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }
}
