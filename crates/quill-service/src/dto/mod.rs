//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BanUserRequest, CreatePostRequest, CreateReportRequest, LoginRequest, RegisterRequest,
    UpdatePostRequest, UpdateReportRequest, UpdateRoleRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthResponse, CurrentUserResponse, HealthResponse, PaginatedResponse,
    PaginationMeta, PostResponse, ReadinessResponse, ReportResponse, SecurityLogResponse,
    UserResponse,
};
