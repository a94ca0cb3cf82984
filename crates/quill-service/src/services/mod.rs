//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, authorization checks, and orchestration of domain
//! operations.

pub mod access;
pub mod audit;
pub mod auth;
pub mod context;
pub mod error;
pub mod moderation;
pub mod post;
pub mod report;
pub mod security_log;
pub mod user;


// Re-export all services for convenience
pub use audit::{AuditEvent, AuditLogger};
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
pub use post::PostService;
pub use report::ReportService;
pub use security_log::SecurityLogService;
pub use user::UserService;
