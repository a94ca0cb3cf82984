//! # quill-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `quill-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model to entity conversions
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quill_db::pool::{create_pool, DatabaseConfig};
//! use quill_db::repositories::PgReportRepository;
//! use quill_core::traits::ReportRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let report_repo = PgReportRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgPostRepository, PgReportRepository, PgSecurityLogRepository, PgUserRepository,
};
