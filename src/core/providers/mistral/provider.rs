//! Mistral Provider Implementation

use crate::core::providers::base::{BaseConfig, OpenAICompatibleProvider};
use crate::core::providers::unified_provider::ProviderError;

use super::config::MISTRAL_DEFAULTS;

pub type MistralProvider = OpenAICompatibleProvider;

impl OpenAICompatibleProvider {
    pub fn mistral(config: &BaseConfig) -> Result<Self, ProviderError> {
        Self::new(config, &MISTRAL_DEFAULTS)
    }
}
