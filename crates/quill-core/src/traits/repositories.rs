//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. List operations always take a bounded query
//! descriptor and return a [`Page`] so no read is unbounded.

use async_trait::async_trait;

use crate::entities::{Post, Report, ReportStatus, SecurityLogEntry, User};
use crate::error::DomainError;
use crate::query::{Page, PostQuery, ReportQuery, SecurityLogQuery};
use crate::value_objects::{Role, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Change a user's role (explicit admin action)
    async fn update_role(&self, id: Snowflake, role: Role) -> RepoResult<()>;

    /// Set ban fields. Upsert semantics: re-banning refreshes actor/reason.
    async fn set_ban(
        &self,
        id: Snowflake,
        actor: Snowflake,
        reason: Option<&str>,
    ) -> RepoResult<()>;

    /// Clear all ban fields
    async fn clear_ban(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// List posts matching a bounded query descriptor
    async fn list(&self, query: &PostQuery) -> RepoResult<Page<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update title/content/category of an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post. Returns false when the row was already gone.
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Bump the view counter (monotonic)
    async fn increment_views(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find report by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>>;

    /// List reports matching a bounded query descriptor
    async fn list(&self, query: &ReportQuery) -> RepoResult<Page<Report>>;

    /// Create a new report
    async fn create(&self, report: &Report) -> RepoResult<()>;

    /// Write a lifecycle transition guarded by the expected prior status.
    ///
    /// Returns false when zero rows matched (the report moved concurrently),
    /// in which case nothing was written.
    async fn transition(&self, report: &Report, expected: ReportStatus) -> RepoResult<bool>;
}

// ============================================================================
// Security Log Repository
// ============================================================================

#[async_trait]
pub trait SecurityLogRepository: Send + Sync {
    /// Append one entry. The store is append-only; there is no update.
    async fn append(&self, entry: &SecurityLogEntry) -> RepoResult<()>;

    /// List entries matching a bounded query descriptor
    async fn list(&self, query: &SecurityLogQuery) -> RepoResult<Page<SecurityLogEntry>>;
}
