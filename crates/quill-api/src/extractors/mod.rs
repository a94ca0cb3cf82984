//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, listing queries,
//! and path parameters.

mod auth;
mod client_ip;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use client_ip::ClientIp;
pub use path::{ModerationTargetPath, PostIdPath, ReportIdPath, UserIdPath};
pub use query::{PostListParams, ReportListParams, SecurityLogListParams};
pub use validated::ValidatedJson;
