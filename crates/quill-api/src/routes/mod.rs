//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, health, moderation, posts, reports, security_logs, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(report_routes())
        .merge(moderation_routes())
        .merge(security_log_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/role", patch(users::update_role))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts", get(posts::list_posts))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", patch(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", post(reports::create_report))
        .route("/reports", get(reports::list_reports))
        .route("/reports/:report_id", get(reports::get_report))
        .route("/reports/:report_id", patch(reports::update_report))
}

/// Moderation routes
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/moderation/content/:target_type/:target_id",
            delete(moderation::delete_content),
        )
        .route("/moderation/bans/:user_id", put(moderation::ban_user))
        .route("/moderation/bans/:user_id", delete(moderation::unban_user))
}

/// Security log routes
fn security_log_routes() -> Router<AppState> {
    Router::new().route("/security-logs", get(security_logs::list_security_logs))
}
