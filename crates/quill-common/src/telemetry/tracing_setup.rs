//! Tracing subscriber setup
//!
//! Environment-based filtering via `RUST_LOG`, with pretty output for
//! development and JSON output for production.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Base log level when `RUST_LOG` is unset
    pub level: Level,
    /// Emit JSON-formatted log lines
    pub json: bool,
    /// Emit span open/close events
    pub span_events: bool,
    /// Include source file and line number
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Pick a sensible configuration for the given environment.
    ///
    /// Production gets JSON output without file locations; everything
    /// else gets human-readable output with span events.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        if env.is_production() {
            Self {
                level: Level::INFO,
                json: true,
                span_events: false,
                file_line: false,
            }
        } else {
            Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
                file_line: true,
            }
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Panics
/// Panics if a subscriber has already been installed.
pub fn init_tracing(config: &TracingConfig) {
    if config.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events());

        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(fmt_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events());

        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(fmt_layer)
            .init();
    }
}

/// Non-panicking variant of [`init_tracing`] for use in tests.
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    if config.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events());

        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        let fmt_layer = fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(config.span_events());

        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json);
        assert!(config.file_line);
    }

    #[test]
    fn test_production_environment_uses_json() {
        let config = TracingConfig::for_environment(Environment::Production);
        assert!(config.json);
        assert!(!config.file_line);
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_development_environment_is_verbose() {
        let config = TracingConfig::for_environment(Environment::Development);
        assert!(!config.json);
        assert!(config.span_events);
        assert_eq!(config.level, Level::DEBUG);
    }

    // The global subscriber can only be installed once per process, so
    // init paths are exercised by the integration test binary instead.
}
