//! Report entity and its lifecycle state machine
//!
//! A report moves pending -> reviewing -> resolved/dismissed (reviewing may be
//! skipped). resolved and dismissed are terminal. Reports are never
//! hard-deleted; the row is the audit trail of the decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// What kind of entity a report points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Post,
    Comment,
    User,
}

impl TargetType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "post" => Some(Self::Post),
            "comment" => Some(Self::Comment),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the reporter filed the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Spam,
    Harassment,
    HateSpeech,
    Violence,
    InappropriateContent,
    Misinformation,
    Copyright,
    Other,
}

impl ReportReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Harassment => "harassment",
            Self::HateSpeech => "hate_speech",
            Self::Violence => "violence",
            Self::InappropriateContent => "inappropriate_content",
            Self::Misinformation => "misinformation",
            Self::Copyright => "copyright",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "spam" => Some(Self::Spam),
            "harassment" => Some(Self::Harassment),
            "hate_speech" => Some(Self::HateSpeech),
            "violence" => Some(Self::Violence),
            "inappropriate_content" => Some(Self::InappropriateContent),
            "misinformation" => Some(Self::Misinformation),
            "copyright" => Some(Self::Copyright),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ReportReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Reviewing,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "reviewing" => Some(Self::Reviewing),
            "resolved" => Some(Self::Resolved),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }

    /// Terminal states have no outgoing transitions
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Dismissed)
    }

    /// The lifecycle only moves forward: pending -> reviewing, pending or
    /// reviewing -> resolved/dismissed. Everything else is illegal, including
    /// self-transitions.
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Reviewing)
                | (Self::Pending, Self::Resolved)
                | (Self::Pending, Self::Dismissed)
                | (Self::Reviewing, Self::Resolved)
                | (Self::Reviewing, Self::Dismissed)
        )
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action a reviewer took when closing a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    #[default]
    None,
    Warning,
    ContentRemoved,
    UserBanned,
    Dismissed,
}

impl ModerationAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Warning => "warning",
            Self::ContentRemoved => "content_removed",
            Self::UserBanned => "user_banned",
            Self::Dismissed => "dismissed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "warning" => Some(Self::Warning),
            "content_removed" => Some(Self::ContentRemoved),
            "user_banned" => Some(Self::UserBanned),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-filed report against a post, comment, or user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Snowflake,
    pub reporter_id: Snowflake,
    pub target_type: TargetType,
    pub target_id: Snowflake,
    pub reason: ReportReason,
    pub description: String,
    pub status: ReportStatus,
    pub action_taken: ModerationAction,
    pub review_notes: Option<String>,
    pub reviewer_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Maximum description length accepted from a reporter
    pub const MAX_DESCRIPTION_LEN: usize = 1000;

    pub fn new(
        id: Snowflake,
        reporter_id: Snowflake,
        target_type: TargetType,
        target_id: Snowflake,
        reason: ReportReason,
        description: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            reporter_id,
            target_type,
            target_id,
            reason,
            description,
            status: ReportStatus::Pending,
            action_taken: ModerationAction::None,
            review_notes: None,
            reviewer_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate and apply a lifecycle transition. The reviewer, action, and
    /// notes are recorded atomically with the status change.
    pub fn transition(
        &mut self,
        next: ReportStatus,
        reviewer: Snowflake,
        action: ModerationAction,
        notes: Option<String>,
    ) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.status.as_str(),
                to: next.as_str(),
            });
        }
        // An action is only meaningful when closing the report
        if !next.is_terminal() && action != ModerationAction::None {
            return Err(DomainError::ValidationError(format!(
                "action {} requires a terminal status, got {next}",
                action.as_str()
            )));
        }
        self.status = next;
        self.reviewer_id = Some(reviewer);
        self.action_taken = action;
        if notes.is_some() {
            self.review_notes = notes;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_report() -> Report {
        Report::new(
            Snowflake::new(1),
            Snowflake::new(2),
            TargetType::Post,
            Snowflake::new(3),
            ReportReason::Spam,
            "spammy link farm".to_string(),
        )
    }

    #[test]
    fn test_allowed_transitions() {
        use ReportStatus::*;
        assert!(Pending.can_transition_to(Reviewing));
        assert!(Pending.can_transition_to(Resolved));
        assert!(Pending.can_transition_to(Dismissed));
        assert!(Reviewing.can_transition_to(Resolved));
        assert!(Reviewing.can_transition_to(Dismissed));
    }

    #[test]
    fn test_forbidden_transitions() {
        use ReportStatus::*;
        assert!(!Reviewing.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Reviewing));
        assert!(!Resolved.can_transition_to(Dismissed));
        assert!(!Dismissed.can_transition_to(Resolved));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_terminal_states() {
        assert!(ReportStatus::Resolved.is_terminal());
        assert!(ReportStatus::Dismissed.is_terminal());
        assert!(!ReportStatus::Pending.is_terminal());
        assert!(!ReportStatus::Reviewing.is_terminal());
    }

    #[test]
    fn test_transition_records_reviewer_atomically() {
        let mut report = test_report();
        report
            .transition(
                ReportStatus::Resolved,
                Snowflake::new(50),
                ModerationAction::ContentRemoved,
                Some("removed the post".to_string()),
            )
            .unwrap();
        assert_eq!(report.status, ReportStatus::Resolved);
        assert_eq!(report.reviewer_id, Some(Snowflake::new(50)));
        assert_eq!(report.action_taken, ModerationAction::ContentRemoved);
        assert_eq!(report.review_notes.as_deref(), Some("removed the post"));
    }

    #[test]
    fn test_action_rejected_on_non_terminal_transition() {
        let mut report = test_report();
        let err = report
            .transition(
                ReportStatus::Reviewing,
                Snowflake::new(50),
                ModerationAction::ContentRemoved,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
        // No state change on the failed attempt
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.action_taken, ModerationAction::None);
        assert!(report.reviewer_id.is_none());

        // Taking the report into review without an action is fine
        report
            .transition(ReportStatus::Reviewing, Snowflake::new(50), ModerationAction::None, None)
            .unwrap();
        assert_eq!(report.status, ReportStatus::Reviewing);
    }

    #[test]
    fn test_transition_from_terminal_fails() {
        let mut report = test_report();
        report
            .transition(ReportStatus::Dismissed, Snowflake::new(50), ModerationAction::Dismissed, None)
            .unwrap();

        let err = report
            .transition(ReportStatus::Reviewing, Snowflake::new(50), ModerationAction::None, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        // No state change on the failed attempt
        assert_eq!(report.status, ReportStatus::Dismissed);
        assert_eq!(report.action_taken, ModerationAction::Dismissed);
    }

    #[test]
    fn test_status_parse_roundtrip() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::Reviewing,
            ReportStatus::Resolved,
            ReportStatus::Dismissed,
        ] {
            assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ReportStatus::parse("open"), None);
    }
}
