//! Domain entities - core business objects

mod post;
mod report;
mod security_log;
mod user;

pub use post::{Post, PostCategory};
pub use report::{ModerationAction, Report, ReportReason, ReportStatus, TargetType};
pub use security_log::{SecurityEventType, SecurityLogEntry};
pub use user::User;
