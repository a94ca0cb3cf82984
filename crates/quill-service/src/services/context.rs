//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service, the snowflake generator, and the
//! audit logger handle that every service needs.

use std::sync::Arc;

use quill_common::JwtService;
use quill_core::traits::{
    PostRepository, ReportRepository, SecurityLogRepository, UserRepository,
};
use quill_core::SnowflakeGenerator;
use quill_db::PgPool;

use super::audit::AuditLogger;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - The audit logger side channel
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    report_repo: Arc<dyn ReportRepository>,
    security_log_repo: Arc<dyn SecurityLogRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    audit: AuditLogger,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        report_repo: Arc<dyn ReportRepository>,
        security_log_repo: Arc<dyn SecurityLogRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        audit: AuditLogger,
    ) -> Self {
        Self {
            pool,
            user_repo,
            post_repo,
            report_repo,
            security_log_repo,
            jwt_service,
            snowflake_generator,
            audit,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the security log repository
    pub fn security_log_repo(&self) -> &dyn SecurityLogRepository {
        self.security_log_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Get the audit logger handle
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> quill_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    security_log_repo: Option<Arc<dyn SecurityLogRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    audit: Option<AuditLogger>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn security_log_repo(mut self, repo: Arc<dyn SecurityLogRepository>) -> Self {
        self.security_log_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            self.security_log_repo
                .ok_or_else(|| ServiceError::validation("security_log_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.audit
                .ok_or_else(|| ServiceError::validation("audit is required"))?,
        ))
    }
}
