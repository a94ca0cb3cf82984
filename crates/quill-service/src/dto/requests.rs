//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying free-form input
//! also implement `Validate`. Closed-set fields (category, status, reason)
//! arrive as strings and are parsed by the services so unknown values fail
//! closed with a validation error.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 50000, message = "Content must be 1-50000 characters"))]
    pub content: String,

    /// One of: tech, lifestyle, travel, food, opinion, other
    pub category: String,
}

/// Update post request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 50000, message = "Content must be 1-50000 characters"))]
    pub content: Option<String>,

    pub category: Option<String>,
}

// ============================================================================
// Report Requests
// ============================================================================

/// Create report request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    /// One of: post, comment, user
    pub target_type: String,

    /// Snowflake ID of the reported entity (as string)
    pub target_id: String,

    /// One of: spam, harassment, hate_speech, violence, inappropriate_content,
    /// misinformation, copyright, other
    pub reason: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    #[serde(default)]
    pub description: String,
}

/// Update report request - a lifecycle transition
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReportRequest {
    /// Next status: reviewing, resolved, or dismissed
    pub status: String,

    /// One of: none, warning, content_removed, user_banned, dismissed
    pub action_taken: Option<String>,

    #[validate(length(max = 2000, message = "Review notes must be at most 2000 characters"))]
    pub review_notes: Option<String>,
}

// ============================================================================
// Moderation / Admin Requests
// ============================================================================

/// Ban user request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct BanUserRequest {
    #[validate(length(max = 500, message = "Reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

/// Role change request (admin only)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    /// One of: user, moderator, admin
    pub role: String,
}
