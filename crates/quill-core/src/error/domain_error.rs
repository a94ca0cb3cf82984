//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Report not found: {0}")]
    ReportNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid date bound: {0}")]
    InvalidDate(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing capability: {0}")]
    MissingCapability(&'static str),

    #[error("Not the resource owner")]
    NotOwner,

    #[error("Banned principals cannot perform mutating operations")]
    PrincipalBanned,

    // =========================================================================
    // Lifecycle / Policy Violations
    // =========================================================================
    #[error("Invalid report transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Conflict: {0}")]
    Conflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidSortKey(_) => "INVALID_SORT_KEY",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::NotOwner => "NOT_RESOURCE_OWNER",
            Self::PrincipalBanned => "PRINCIPAL_BANNED",

            // Lifecycle / Policy
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::PolicyViolation(_) => "POLICY_VIOLATION",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::ReportNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidSortKey(_)
                | Self::InvalidDate(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    ///
    /// `PolicyViolation` (rank-based ban restriction) and `InvalidTransition`
    /// are deliberately their own categories with their own codes, but both
    /// surface as 4xx denials, not authorization failures.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingCapability(_) | Self::NotOwner | Self::PrincipalBanned
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::UsernameAlreadyExists | Self::Conflict(_)
        )
    }

    /// Check if this is an illegal lifecycle move or policy violation
    pub fn is_policy(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. } | Self::PolicyViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::InvalidTransition { from: "resolved", to: "pending" };
        assert_eq!(err.code(), "INVALID_TRANSITION");

        let err = DomainError::PolicyViolation("moderator cannot ban moderator".to_string());
        assert_eq!(err.code(), "POLICY_VIOLATION");
    }

    #[test]
    fn test_category_predicates() {
        assert!(DomainError::ReportNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::InvalidSortKey("rank".to_string()).is_validation());
        assert!(DomainError::PrincipalBanned.is_authorization());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(DomainError::PolicyViolation("x".to_string()).is_policy());
        assert!(!DomainError::PolicyViolation("x".to_string()).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidTransition { from: "resolved", to: "pending" };
        assert_eq!(err.to_string(), "Invalid report transition: resolved -> pending");

        let err = DomainError::ContentTooLong { max: 1000 };
        assert_eq!(err.to_string(), "Content too long: max 1000 characters");
    }
}
