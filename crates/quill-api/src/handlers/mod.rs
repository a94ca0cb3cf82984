//! Request handlers organized by domain

pub mod auth;
pub mod health;
pub mod moderation;
pub mod posts;
pub mod reports;
pub mod security_logs;
pub mod users;
