//! Test fixtures and data factories
//!
//! Factories build real configuration and request values with sensible
//! defaults; tests only override what they assert on.

use llm_dispatch::config::{
    GatewayConfig, OrganizationSeed, ProviderConfig, SeedConfig, StorageConfig, TierSeed,
};
use llm_dispatch::{ChatMessage, ChatRequest, Config};

/// Model name every mock provider in a test is configured to serve
pub const SHARED_MODEL: &str = "chat-model";

/// Organization seeded by [`ConfigFactory::gateway`]
pub const ORG_ID: &str = "org-1";

pub const USER_ID: &str = "user-1";

/// Factory for gateway configuration
pub struct ConfigFactory;

impl ConfigFactory {
    /// Provider entry pointed at a mock server, serving [`SHARED_MODEL`]
    pub fn provider(name: &str, provider_type: &str, base_url: &str) -> ProviderConfig {
        ProviderConfig {
            name: name.to_string(),
            provider_type: provider_type.to_string(),
            api_key: Some(format!("{}-key", name)),
            base_url: Some(base_url.to_string()),
            timeout: 5,
            models: vec![SHARED_MODEL.to_string()],
            ..ProviderConfig::default()
        }
    }

    /// Provider entry limited to `rpm` requests per window
    pub fn throttled_provider(
        name: &str,
        provider_type: &str,
        base_url: &str,
        rpm: u32,
    ) -> ProviderConfig {
        let mut provider = Self::provider(name, provider_type, base_url);
        provider.rate_limit.rpm = Some(rpm);
        provider
    }

    /// Seed with one unlimited tier and [`ORG_ID`] subscribed to it
    pub fn seed() -> SeedConfig {
        SeedConfig {
            tiers: vec![TierSeed {
                name: "pro".to_string(),
                max_ai_requests_per_day: None,
            }],
            organizations: vec![Self::organization(ORG_ID, "pro", "active")],
        }
    }

    pub fn organization(id: &str, tier: &str, status: &str) -> OrganizationSeed {
        OrganizationSeed {
            id: id.to_string(),
            subscription_tier: tier.to_string(),
            subscription_status: status.to_string(),
            subscription_end_date: None,
        }
    }

    /// Validated configuration with in-memory storage and the default seed
    pub fn gateway(providers: Vec<ProviderConfig>) -> Config {
        Self::with_storage(
            providers,
            StorageConfig {
                seed: Self::seed(),
                ..StorageConfig::default()
            },
        )
    }

    pub fn with_storage(providers: Vec<ProviderConfig>, storage: StorageConfig) -> Config {
        let config = Config {
            gateway: GatewayConfig {
                providers,
                storage,
                ..GatewayConfig::default()
            },
        };
        config.validate().expect("fixture config should validate");
        config
    }
}

/// Factory for chat requests
pub struct RequestFactory;

impl RequestFactory {
    /// Single user turn for [`SHARED_MODEL`] on behalf of [`ORG_ID`]
    pub fn chat(content: &str) -> ChatRequest {
        Self::for_org(ORG_ID, content)
    }

    pub fn for_org(organization_id: &str, content: &str) -> ChatRequest {
        ChatRequest::new(
            SHARED_MODEL,
            vec![
                ChatMessage::system("You are a helpful assistant."),
                ChatMessage::user(content),
            ],
            USER_ID,
            organization_id,
        )
        .with_max_tokens(64)
    }
}
