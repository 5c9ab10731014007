//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;

        if self.enabled_providers().next().is_none() {
            return Err("At least one provider must be configured".to_string());
        }

        let mut provider_names = HashSet::new();
        for provider in &self.providers {
            if !provider_names.insert(&provider.name) {
                return Err(format!("Duplicate provider name: {}", provider.name));
            }
            provider.validate()?;
        }

        self.resilience.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Provider name cannot be empty".to_string());
        }

        self.provider_type
            .parse::<crate::core::providers::ProviderType>()
            .map_err(|e| format!("Provider {}: {}", self.name, e))?;

        if self.timeout == 0 {
            return Err(format!(
                "Provider {}: timeout must be greater than 0",
                self.name
            ));
        }

        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(format!(
                    "Provider {}: base_url must be an http(s) URL",
                    self.name
                ));
            }
        }

        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err(format!("Provider {}: model names cannot be empty", self.name));
        }

        Ok(())
    }
}

impl Validate for ResilienceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.circuit_breaker.failure_threshold == 0 {
            return Err("Circuit breaker failure_threshold must be greater than 0".to_string());
        }
        if self.circuit_breaker.cooldown_secs == 0 {
            return Err("Circuit breaker cooldown_secs must be greater than 0".to_string());
        }
        if self.rate_limit.window_secs == 0 {
            return Err("Rate limit window_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        let database = &self.database;
        if database.enabled {
            if database.url.is_empty() {
                return Err("Database URL is required".to_string());
            }
            if database.max_connections == 0 {
                return Err("Database max_connections must be greater than 0".to_string());
            }
        }

        let mut tiers = HashSet::new();
        for tier in &self.seed.tiers {
            if tier.name.is_empty() {
                return Err("Seeded tier name cannot be empty".to_string());
            }
            if !tiers.insert(&tier.name) {
                return Err(format!("Duplicate seeded tier: {}", tier.name));
            }
        }

        for organization in &self.seed.organizations {
            if organization.id.is_empty() {
                return Err("Seeded organization id cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
