//! # quill-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuditEvent, AuditLogger, AuthService, ModerationService, PostService, ReportService,
    SecurityLogService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    UserService,
};
