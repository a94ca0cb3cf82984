//! PostgreSQL repository implementations

mod error;
mod post;
mod report;
mod security_log;
mod user;

pub use post::PgPostRepository;
pub use report::PgReportRepository;
pub use security_log::PgSecurityLogRepository;
pub use user::PgUserRepository;
