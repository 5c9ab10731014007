//! Vendor adapters behind a single registry

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::fixtures::SHARED_MODEL;
    use crate::common::{ConfigFactory, RequestFactory, VendorMock};
    use llm_dispatch::config::ProviderConfig;
    use llm_dispatch::core::build_registry;
    use llm_dispatch::storage::{MemoryStore, StorageLayer};
    use llm_dispatch::{FinishReason, Gateway, LLMProvider, ProviderType};
    use std::sync::Arc;

    async fn dispatch_single(provider: ProviderConfig) -> llm_dispatch::ChatResponse {
        let config = ConfigFactory::gateway(vec![provider]);
        let store = Arc::new(MemoryStore::new());
        for organization in &config.storage().seed.organizations {
            store.insert_organization(organization.to_record());
        }
        let gateway = assert_ok!(Gateway::with_storage(config, StorageLayer::memory(store)));
        assert_ok!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("hello"))
                .await
        )
    }

    #[tokio::test]
    async fn test_openai_compatible_vendors_share_wire_format() {
        for provider_type in ["openai", "mistral", "deepseek"] {
            let server = VendorMock::start().await;
            server.openai_reply(provider_type, 1).await;

            let response =
                dispatch_single(ConfigFactory::provider("vendor", provider_type, &server.uri()))
                    .await;

            assert_eq!(response.content, provider_type);
            assert_eq!(response.provider, "vendor");
            assert_eq!(response.finish_reason, FinishReason::Stop);
            assert_eq!(response.usage.prompt_tokens, 12);
        }
    }

    #[tokio::test]
    async fn test_anthropic_normalized_response() {
        let server = VendorMock::start().await;
        server.anthropic_reply("bonjour", 1).await;

        let response =
            dispatch_single(ConfigFactory::provider("claude", "anthropic", &server.uri())).await;

        assert_eq!(response.content, "bonjour");
        assert_eq!(response.provider, "claude");
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert_eq!(response.usage.total_tokens, 15);
    }

    #[tokio::test]
    async fn test_gemini_normalized_response() {
        let server = VendorMock::start().await;
        server.gemini_reply("hola", 1).await;

        let response =
            dispatch_single(ConfigFactory::provider("gemini", "google", &server.uri())).await;

        assert_eq!(response.content, "hola");
        assert_eq!(response.model, SHARED_MODEL);
        assert_eq!(response.usage.completion_tokens, 3);
    }

    #[test]
    fn test_default_entries_use_vendor_names_and_models() {
        let providers: Vec<ProviderConfig> = ProviderType::ALL
            .iter()
            .map(|t| ProviderConfig::for_type(*t))
            .collect();

        let registry = assert_ok!(build_registry(&providers));
        assert_eq!(
            registry.names(),
            vec!["openai", "anthropic", "google", "mistral", "deepseek"]
        );

        let google = registry.get("google").expect("google registered");
        assert!(google.supports_model("gemini-1.5-pro"));
        assert_eq!(registry.find_supporting_model("deepseek-chat").len(), 1);
        assert!(registry.find_supporting_model("gpt-5-unknown").is_empty());
    }

    #[tokio::test]
    async fn test_provider_status_checks_liveness() {
        let alive = VendorMock::start().await;
        let dead = VendorMock::start().await;
        alive.models_listing().await;

        let config = ConfigFactory::gateway(vec![
            ConfigFactory::provider("alive", "openai", &alive.uri()),
            ConfigFactory::provider("dead", "openai", &dead.uri()),
        ]);
        let gateway = assert_ok!(Gateway::with_storage(
            config,
            StorageLayer::memory(Arc::new(MemoryStore::new()))
        ));

        let status = gateway.dispatcher().provider_status().await;
        assert_eq!(status.get("alive"), Some(&true));
        assert_eq!(status.get("dead"), Some(&false));
    }
}
