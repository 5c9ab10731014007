//! Provider Registry
//!
//! Ordered registry of provider adapters. Registration order is the
//! selector's tie-break order.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::traits::LLMProvider;
use crate::utils::error::{GatewayError, Result};

/// Provider Registry
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn LLMProvider>>,
    index: HashMap<String, usize>,
}

impl ProviderRegistry {
    /// Create new provider registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider; names must be unique
    pub fn register(&mut self, provider: Arc<dyn LLMProvider>) -> Result<()> {
        let name = provider.name().to_string();
        if self.index.contains_key(&name) {
            return Err(GatewayError::config(format!(
                "Provider {} is already registered",
                name
            )));
        }
        self.index.insert(name, self.providers.len());
        self.providers.push(provider);
        Ok(())
    }

    /// Get provider by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn LLMProvider>> {
        self.index.get(name).map(|&i| &self.providers[i])
    }

    /// Check if provider is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Providers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn LLMProvider>> {
        self.providers.iter()
    }

    /// Find providers supporting a specific model, in registration order
    pub fn find_supporting_model(&self, model: &str) -> Vec<&Arc<dyn LLMProvider>> {
        self.providers
            .iter()
            .filter(|p| p.supports_model(model))
            .collect()
    }

    /// Get provider count
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.providers.len())
            .field("providers", &self.names())
            .finish()
    }
}
