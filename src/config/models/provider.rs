//! Provider configuration

use super::*;
use crate::core::providers::base::CeilingOverride;
use crate::core::providers::{BaseConfig, ProviderType, build_provider};
use crate::core::traits::LLMProvider;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Registry name, unique across providers
    pub name: String,
    /// Provider type (openai, anthropic, google, mistral, deepseek)
    pub provider_type: String,
    /// API key; the vendor environment variable is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Served models; empty means the vendor defaults
    #[serde(default)]
    pub models: Vec<String>,
    /// rpm / rpd / tpm / tpd overrides of the vendor ceiling
    #[serde(default, flatten)]
    pub rate_limit: CeilingOverride,
    /// Whether provider is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider_type: String::new(),
            api_key: None,
            base_url: None,
            timeout: default_timeout(),
            models: Vec::new(),
            rate_limit: CeilingOverride::default(),
            enabled: true,
        }
    }
}

impl ProviderConfig {
    /// Entry for a vendor under its default name
    pub fn for_type(provider_type: ProviderType) -> Self {
        Self {
            name: provider_type.defaults().name.to_string(),
            provider_type: provider_type.to_string(),
            ..Self::default()
        }
    }

    pub fn parsed_type(&self) -> Result<ProviderType> {
        self.provider_type
            .parse()
            .map_err(|e: String| GatewayError::config(format!("Provider {}: {}", self.name, e)))
    }

    pub fn to_base_config(&self) -> BaseConfig {
        BaseConfig {
            name: Some(self.name.clone()),
            api_key: self.api_key.clone(),
            api_base: self.base_url.clone(),
            timeout: self.timeout,
            models: (!self.models.is_empty()).then(|| self.models.clone()),
            rate_limit: self.rate_limit,
        }
    }

    /// Construct the adapter this entry describes
    pub fn build(&self) -> Result<Arc<dyn LLMProvider>> {
        let provider_type = self.parsed_type()?;
        Ok(build_provider(provider_type, &self.to_base_config())?)
    }
}
