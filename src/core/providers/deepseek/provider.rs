//! DeepSeek Provider Implementation

use crate::core::providers::base::{BaseConfig, OpenAICompatibleProvider};
use crate::core::providers::unified_provider::ProviderError;

use super::config::DEEPSEEK_DEFAULTS;

pub type DeepSeekProvider = OpenAICompatibleProvider;

impl OpenAICompatibleProvider {
    pub fn deepseek(config: &BaseConfig) -> Result<Self, ProviderError> {
        Self::new(config, &DEEPSEEK_DEFAULTS)
    }
}
