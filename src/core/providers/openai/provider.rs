//! OpenAI Provider Implementation

use crate::core::providers::base::{BaseConfig, OpenAICompatibleProvider};
use crate::core::providers::unified_provider::ProviderError;

use super::config::OPENAI_DEFAULTS;

pub type OpenAIProvider = OpenAICompatibleProvider;

impl OpenAICompatibleProvider {
    pub fn openai(config: &BaseConfig) -> Result<Self, ProviderError> {
        Self::new(config, &OPENAI_DEFAULTS)
    }
}
