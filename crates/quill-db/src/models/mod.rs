//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Closed-set columns (role, status, category, ...) are stored as TEXT and
//! decoded with `TryFrom`; an unknown value in the database surfaces as a
//! `DatabaseError` instead of a silent default.

mod post;
mod report;
mod security_log;
mod user;

pub use post::PostModel;
pub use report::ReportModel;
pub use security_log::SecurityLogModel;
pub use user::UserModel;
