//! Quill API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p quill-api
//! ```
//!
//! Configuration is loaded from environment variables or a .env file.

use quill_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Initialize tracing for the configured environment
    let tracing_config = TracingConfig::for_environment(config.app.env);
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!("Starting Quill API server...");
    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    quill_api::run(config).await?;

    Ok(())
}
