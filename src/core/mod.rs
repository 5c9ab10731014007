//! Core functionality for the Gateway
//!
//! This module contains the core business logic and data structures.

pub mod access;
pub mod circuit_breaker;
pub mod providers;
pub mod rate_limiter;
pub mod router;
pub mod traits;
pub mod types;

use crate::config::{Config, ProviderConfig};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use access::AccessPolicy;
use circuit_breaker::{BreakerSnapshot, CircuitBreakers};
use providers::ProviderRegistry;
use rate_limiter::{RateLimiter, WindowSnapshot};
use router::{DispatchState, Dispatcher};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main Gateway struct that wires storage, providers and the dispatcher
#[derive(Clone)]
pub struct Gateway {
    /// Gateway configuration
    config: Arc<Config>,
    /// Storage layer
    storage: StorageLayer,
    /// Request dispatcher
    dispatcher: Dispatcher,
}

impl Gateway {
    /// Create a new Gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing Gateway");

        debug!("Initializing storage layer");
        let storage = StorageLayer::new(&config.gateway.storage).await?;

        Self::with_storage(config, storage)
    }

    /// Create a Gateway over an already initialized storage layer
    pub fn with_storage(config: Config, storage: StorageLayer) -> Result<Self> {
        debug!("Registering providers");
        let registry = build_registry(config.providers())?;

        let resilience = config.resilience();
        let state = DispatchState::new(
            registry,
            RateLimiter::new(resilience.rate_limit.window()),
            CircuitBreakers::new(resilience.circuit_breaker.to_breaker_config()),
        );

        let dispatcher = Dispatcher::new(
            Arc::new(state),
            AccessPolicy::new(storage.organizations()),
            storage.history(),
        );

        info!("Gateway initialized successfully");
        Ok(Self {
            config: Arc::new(config),
            storage,
            dispatcher,
        })
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get storage layer
    pub fn storage(&self) -> &StorageLayer {
        &self.storage
    }

    /// Get request dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Storage reachability and breaker health, without calling any vendor
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now(),
            components: HashMap::new(),
            providers: BTreeMap::new(),
        };

        match self.storage.health_check().await {
            Ok(()) => {
                status.components.insert(
                    "storage".to_string(),
                    ComponentHealth {
                        status: "healthy".to_string(),
                        message: Some(self.storage.backend_name().to_string()),
                    },
                );
            }
            Err(e) => {
                status.status = "unhealthy".to_string();
                status.components.insert(
                    "storage".to_string(),
                    ComponentHealth {
                        status: "unhealthy".to_string(),
                        message: Some(e.to_string()),
                    },
                );
            }
        }

        let state = self.dispatcher.state();
        let total = state.registry.len();
        let healthy = state
            .registry
            .iter()
            .filter(|p| state.breakers.is_healthy(p.name()))
            .count();
        let providers_status = if healthy == 0 {
            // A storage outage stays unhealthy
            if status.status == "healthy" {
                status.status = "degraded".to_string();
            }
            "unhealthy"
        } else {
            "healthy"
        };
        status.components.insert(
            "providers".to_string(),
            ComponentHealth {
                status: providers_status.to_string(),
                message: Some(format!("{}/{} providers accepting traffic", healthy, total)),
            },
        );

        for provider in state.registry.iter() {
            let name = provider.name();
            status.providers.insert(
                name.to_string(),
                ProviderHealth {
                    circuit: state.breakers.snapshot(name),
                    window: state.limiter.snapshot(name),
                },
            );
        }

        status
    }
}

/// Build the registry from enabled provider entries, in configuration order
///
/// An entry whose adapter cannot be constructed is skipped with a warning.
pub fn build_registry(providers: &[ProviderConfig]) -> Result<ProviderRegistry> {
    let mut registry = ProviderRegistry::new();

    for provider_config in providers.iter().filter(|p| p.enabled) {
        match provider_config.build() {
            Ok(provider) => {
                registry.register(provider)?;
                info!(
                    provider = %provider_config.name,
                    provider_type = %provider_config.provider_type,
                    "Registered provider"
                );
            }
            Err(e) => {
                warn!(
                    "Failed to initialize provider {}: {}",
                    provider_config.name, e
                );
            }
        }
    }

    Ok(registry)
}

/// Health status response
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    /// Overall system status
    pub status: String,
    /// Timestamp when health was checked
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Health status of individual components
    pub components: HashMap<String, ComponentHealth>,
    /// Breaker and rate window of each registered provider
    pub providers: BTreeMap<String, ProviderHealth>,
}

/// Dispatch state of one provider
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProviderHealth {
    pub circuit: BreakerSnapshot,
    /// Absent until the provider serves a request in the current window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowSnapshot>,
}

/// Component health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComponentHealth {
    /// Component status
    pub status: String,
    /// Optional status message
    pub message: Option<String>,
}
