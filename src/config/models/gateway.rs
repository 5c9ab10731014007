//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use crate::core::providers::ProviderType;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations, in selection tie-break order
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    /// Circuit breaker and rate window settings
    #[serde(default)]
    pub resilience: ResilienceConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Build from environment variables
    ///
    /// Providers are discovered from whichever vendor API keys are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("GATEWAY_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| GatewayError::config(format!("Invalid GATEWAY_PORT: {}", port)))?;
        }

        for provider_type in ProviderType::ALL {
            let key_env = provider_type.defaults().api_key_env;
            if std::env::var(key_env).is_ok_and(|k| !k.is_empty()) {
                debug!("Found {}, enabling provider {}", key_env, provider_type);
                config.providers.push(ProviderConfig::for_type(provider_type));
            }
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.storage.database.enabled = true;
            config.storage.database.url = url;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        config.logging.json = std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json");

        Ok(config)
    }

    /// Get provider by name
    pub fn get_provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Enabled providers, in configuration order
    pub fn enabled_providers(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.providers.iter().filter(|p| p.enabled)
    }
}
