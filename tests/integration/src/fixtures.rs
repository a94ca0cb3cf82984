//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub created_at: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub created_at: String,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test post {suffix}"),
            content: "A longer body of text for the test post.".to_string(),
            category: "tech".to_string(),
        }
    }
}

/// Update post request
#[derive(Debug, Default, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub views: i64,
    pub likes: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Paginated listing response
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// Create report request
#[derive(Debug, Serialize)]
pub struct CreateReportRequest {
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
    pub description: String,
}

impl CreateReportRequest {
    pub fn for_post(post_id: &str) -> Self {
        Self {
            target_type: "post".to_string(),
            target_id: post_id.to_string(),
            reason: "spam".to_string(),
            description: "Repeated promotional content.".to_string(),
        }
    }
}

/// Update report request (lifecycle transition)
#[derive(Debug, Serialize)]
pub struct UpdateReportRequest {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}

/// Report response
#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    pub id: String,
    pub reporter_id: String,
    pub target_type: String,
    pub target_id: String,
    pub reason: String,
    pub description: String,
    pub status: String,
    pub action_taken: String,
    pub review_notes: Option<String>,
    pub reviewer_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Ban request
#[derive(Debug, Default, Serialize)]
pub struct BanUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Security log entry response
#[derive(Debug, Deserialize)]
pub struct SecurityLogResponse {
    pub id: String,
    pub event_type: String,
    pub ip: String,
    pub endpoint: String,
    pub user_id: Option<String>,
    pub created_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
