//! Repository traits (ports)

mod repositories;

pub use repositories::{
    PostRepository, RepoResult, ReportRepository, SecurityLogRepository, UserRepository,
};
