//! Provider adapters
//!
//! One module per vendor, a shared OpenAI-compatible base, the unified
//! error type, and the ordered registry the dispatcher selects from.

pub mod anthropic;
pub mod base;
pub mod deepseek;
pub mod gemini;
pub mod mistral;
pub mod openai;
pub mod provider_registry;
pub mod unified_provider;

use std::sync::Arc;

pub use anthropic::AnthropicProvider;
pub use base::{BaseConfig, OpenAICompatibleProvider, VendorDefaults};
pub use gemini::GeminiProvider;
pub use provider_registry::ProviderRegistry;
pub use unified_provider::{ProviderError, ProviderErrorKind};

use crate::core::traits::LLMProvider;

/// Provider type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    Anthropic,
    Google,
    Mistral,
    DeepSeek,
}

impl ProviderType {
    pub const ALL: [ProviderType; 5] = [
        ProviderType::OpenAI,
        ProviderType::Anthropic,
        ProviderType::Google,
        ProviderType::Mistral,
        ProviderType::DeepSeek,
    ];

    /// Compile-time defaults for this vendor
    pub fn defaults(&self) -> &'static VendorDefaults {
        match self {
            ProviderType::OpenAI => &openai::OPENAI_DEFAULTS,
            ProviderType::Anthropic => &anthropic::ANTHROPIC_DEFAULTS,
            ProviderType::Google => &gemini::GEMINI_DEFAULTS,
            ProviderType::Mistral => &mistral::MISTRAL_DEFAULTS,
            ProviderType::DeepSeek => &deepseek::DEEPSEEK_DEFAULTS,
        }
    }
}

impl std::str::FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderType::OpenAI),
            "anthropic" | "claude" => Ok(ProviderType::Anthropic),
            "google" | "gemini" => Ok(ProviderType::Google),
            "mistral" | "mistralai" => Ok(ProviderType::Mistral),
            "deepseek" | "deep-seek" => Ok(ProviderType::DeepSeek),
            other => Err(format!("Unknown provider type: {}", other)),
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::Anthropic => write!(f, "anthropic"),
            ProviderType::Google => write!(f, "google"),
            ProviderType::Mistral => write!(f, "mistral"),
            ProviderType::DeepSeek => write!(f, "deepseek"),
        }
    }
}

/// Construct the adapter for `provider_type`
pub fn build_provider(
    provider_type: ProviderType,
    config: &BaseConfig,
) -> Result<Arc<dyn LLMProvider>, ProviderError> {
    let provider: Arc<dyn LLMProvider> = match provider_type {
        ProviderType::OpenAI => Arc::new(OpenAICompatibleProvider::openai(config)?),
        ProviderType::Anthropic => Arc::new(AnthropicProvider::new(config)?),
        ProviderType::Google => Arc::new(GeminiProvider::new(config)?),
        ProviderType::Mistral => Arc::new(OpenAICompatibleProvider::mistral(config)?),
        ProviderType::DeepSeek => Arc::new(OpenAICompatibleProvider::deepseek(config)?),
    };
    Ok(provider)
}
