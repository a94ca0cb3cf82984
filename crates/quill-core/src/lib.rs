//! # quill-core
//!
//! Domain layer containing entities, value objects, the access policy, and
//! repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ModerationAction, Post, PostCategory, Report, ReportReason, ReportStatus, SecurityEventType,
    SecurityLogEntry, TargetType, User,
};
pub use error::DomainError;
pub use policy::{Capability, Ownership};
pub use query::{
    DateRange, Page, PageRequest, PostQuery, PostSortKey, ReportQuery, ReportSortKey,
    SecurityLogQuery, SortDirection,
};
pub use traits::{
    PostRepository, RepoResult, ReportRepository, SecurityLogRepository, UserRepository,
};
pub use value_objects::{Role, Snowflake, SnowflakeGenerator, SnowflakeParseError};
