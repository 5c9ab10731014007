//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{GatewayError, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the event filter for `config`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            GatewayError::config(format!("Invalid log level {:?}: {}", config.level, e))
        }),
    }
}

/// Install the global subscriber; fails if one is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init()
    };
    installed.map_err(|e| GatewayError::internal(format!("Failed to initialize logging: {}", e)))?;

    info!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}
