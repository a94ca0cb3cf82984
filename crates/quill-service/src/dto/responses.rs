//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

use quill_core::entities::{Post, Report, SecurityLogEntry, User};
use quill_core::query::Page;
use quill_core::value_objects::Snowflake;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated response with offset pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl<T> PaginatedResponse<T> {
    /// Convert a domain page into a response, mapping each item
    pub fn from_page<E>(page: Page<E>, f: impl FnMut(E) -> T) -> Self {
        let meta = PaginationMeta {
            page: page.page,
            limit: page.limit,
            total: page.total,
            pages: page.pages,
        };
        Self {
            items: page.items.into_iter().map(f).collect(),
            pagination: meta,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the access token and the current user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: CurrentUserResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Current authenticated user response (includes email and ban state)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            banned: user.banned,
            ban_reason: user.ban_reason.clone(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub views: i64,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            owner_id: post.owner_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category.as_str().to_string(),
            views: post.views,
            likes: post.likes,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

// ============================================================================
// Report Responses
// ============================================================================

/// Report response for the moderation queue
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub reporter_id: String,
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
    pub description: String,
    pub status: String,
    pub action_taken: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.to_string(),
            reporter_id: report.reporter_id.to_string(),
            target_type: report.target_type.as_str().to_string(),
            target_id: report.target_id.to_string(),
            reason: report.reason.as_str().to_string(),
            description: report.description.clone(),
            status: report.status.as_str().to_string(),
            action_taken: report.action_taken.as_str().to_string(),
            review_notes: report.review_notes.clone(),
            reviewer_id: report.reviewer_id.map(|id| id.to_string()),
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

// ============================================================================
// Security Log Responses
// ============================================================================

/// Security log entry response (admin console)
#[derive(Debug, Clone, Serialize)]
pub struct SecurityLogResponse {
    pub id: String,
    pub event_type: String,
    pub ip: String,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

impl From<&SecurityLogEntry> for SecurityLogResponse {
    fn from(entry: &SecurityLogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            event_type: entry.event_type.as_str().to_string(),
            ip: entry.ip.clone(),
            endpoint: entry.endpoint.clone(),
            user_id: entry.user_id.map(|id: Snowflake| id.to_string()),
            details: entry.details.clone(),
            created_at: entry.created_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn new(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "ready" } else { "degraded" },
            database: if database_ok { "up" } else { "down" },
        }
    }
}
