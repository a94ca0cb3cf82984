//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use quill_common::{AppConfig, AppError, JwtService};
use quill_core::SnowflakeGenerator;
use quill_db::{
    create_pool, PgPostRepository, PgReportRepository, PgSecurityLogRepository, PgUserRepository,
};
use quill_service::{AuditLogger, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes bypass rate limiting; everything else carries the
/// full stack.
pub fn create_app(state: AppState) -> Router {
    let is_production = state.config().app.env.is_production();
    let api = apply_middleware_with_config(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        is_production,
    );
    let health = apply_middleware(health_routes());

    health.merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = quill_db::DatabaseConfig::from_app_config(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let report_repo = Arc::new(PgReportRepository::new(pool.clone()));
    let security_log_repo = Arc::new(PgSecurityLogRepository::new(pool.clone()));

    // Spawn the audit writer draining into the security log
    let audit = AuditLogger::spawn(
        security_log_repo.clone(),
        snowflake_generator.clone(),
        config.audit.queue_capacity,
    );

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .post_repo(post_repo)
        .report_repo(report_repo)
        .security_log_repo(security_log_repo)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .audit(audit)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
