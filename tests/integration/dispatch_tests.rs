//! Dispatch, fallback and resilience through a fully wired gateway

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::common::fixtures::{ORG_ID, SHARED_MODEL};
    use crate::common::{ConfigFactory, RequestFactory, VendorMock};
    use crate::{assert_err, assert_ok};
    use llm_dispatch::core::types::DispatchStatus;
    use llm_dispatch::storage::{MemoryStore, StorageLayer};
    use llm_dispatch::{ChatMessage, ChatRequest, Config, Gateway, GatewayError, MessageRole};

    fn gateway(config: Config) -> (Gateway, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let storage = StorageLayer::memory(store.clone());
        let seed = config.storage().seed.clone();
        for organization in &seed.organizations {
            store.insert_organization(organization.to_record());
        }
        let gateway = assert_ok!(Gateway::with_storage(config, storage));
        (gateway, store)
    }

    #[tokio::test]
    async fn test_primary_serves_when_healthy() {
        let primary = VendorMock::start().await;
        let backup = VendorMock::start().await;
        primary.openai_reply("from primary", 1).await;
        backup.openai_reply("from backup", 0).await;

        let (gateway, store) = gateway(ConfigFactory::gateway(vec![
            ConfigFactory::provider("primary", "openai", &primary.uri()),
            ConfigFactory::provider("backup", "openai", &backup.uri()),
        ]));

        let response = assert_ok!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("hello"))
                .await
        );
        assert_eq!(response.provider, "primary");
        assert_eq!(response.content, "from primary");
        assert_eq!(response.usage.total_tokens, 15);

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[0].content, "hello");
        assert_eq!(history[0].organization_id, ORG_ID);
        assert_eq!(history[0].metadata.status, Some(DispatchStatus::Success));
        assert_eq!(history[1].role, MessageRole::Assistant);
        assert_eq!(history[1].content, "from primary");
        assert_eq!(history[1].metadata.provider.as_deref(), Some("primary"));
    }

    #[tokio::test]
    async fn test_timed_out_provider_trips_breaker_and_falls_back() {
        let primary = VendorMock::start().await;
        let backup = VendorMock::start().await;
        primary.openai_slow_reply(Duration::from_secs(5)).await;
        backup.openai_reply("from backup", 1).await;

        let mut slow = ConfigFactory::provider("primary", "openai", &primary.uri());
        slow.timeout = 1;
        let (gateway, _store) = gateway(ConfigFactory::gateway(vec![
            slow,
            ConfigFactory::provider("backup", "openai", &backup.uri()),
        ]));

        let response = assert_ok!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("hello"))
                .await
        );
        assert_eq!(response.provider, "backup");
        assert_eq!(response.content, "from backup");
        assert_eq!(primary.received().await, 1);

        let breakers = &gateway.dispatcher().state().breakers;
        assert_eq!(breakers.consecutive_failures("primary"), 1);
        assert_eq!(breakers.consecutive_failures("backup"), 0);
    }

    #[tokio::test]
    async fn test_falls_back_across_vendor_formats() {
        let primary = VendorMock::start().await;
        let backup = VendorMock::start().await;
        primary.fail_with(500, 1).await;
        backup.anthropic_reply("from claude", 1).await;

        let (gateway, store) = gateway(ConfigFactory::gateway(vec![
            ConfigFactory::provider("primary", "openai", &primary.uri()),
            ConfigFactory::provider("backup", "anthropic", &backup.uri()),
        ]));

        let response = assert_ok!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("hello"))
                .await
        );
        assert_eq!(response.provider, "backup");
        assert_eq!(response.content, "from claude");

        let breakers = &gateway.dispatcher().state().breakers;
        assert_eq!(breakers.consecutive_failures("primary"), 1);
        assert_eq!(breakers.consecutive_failures("backup"), 0);

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].metadata.provider.as_deref(), Some("backup"));
    }

    #[tokio::test]
    async fn test_last_error_returned_when_every_provider_fails() {
        let primary = VendorMock::start().await;
        let backup = VendorMock::start().await;
        primary.fail_with(503, 1).await;
        backup.fail_with(401, 1).await;

        let (gateway, store) = gateway(ConfigFactory::gateway(vec![
            ConfigFactory::provider("primary", "openai", &primary.uri()),
            ConfigFactory::provider("backup", "mistral", &backup.uri()),
        ]));

        let err = assert_err!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("hello"))
                .await
        );
        match err {
            GatewayError::Provider(e) => assert_eq!(e.provider(), "backup"),
            other => panic!("unexpected error: {:?}", other),
        }

        let history = store.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].metadata.status, Some(DispatchStatus::Failed));
        assert!(history[0].metadata.error.is_some());
    }

    #[tokio::test]
    async fn test_breaker_opens_and_stops_traffic() {
        let primary = VendorMock::start().await;
        let backup = VendorMock::start().await;
        primary.fail_with(500, 2).await;
        backup.openai_reply("from backup", 3).await;

        let mut config = ConfigFactory::gateway(vec![
            ConfigFactory::provider("primary", "openai", &primary.uri()),
            ConfigFactory::provider("backup", "deepseek", &backup.uri()),
        ]);
        config.gateway.resilience.circuit_breaker.failure_threshold = 2;
        let (gateway, _store) = gateway(config);

        for _ in 0..3 {
            let response = assert_ok!(
                gateway
                    .dispatcher()
                    .dispatch(&RequestFactory::chat("hello"))
                    .await
            );
            assert_eq!(response.provider, "backup");
        }

        assert_eq!(primary.received().await, 2);
        assert!(!gateway.dispatcher().state().breakers.is_healthy("primary"));

        let models = gateway.dispatcher().list_available_models();
        assert!(!models.contains_key("primary"));
        assert_eq!(models["backup"], vec![SHARED_MODEL.to_string()]);
    }

    #[tokio::test]
    async fn test_load_spreads_and_throttled_provider_is_skipped() {
        let primary = VendorMock::start().await;
        let backup = VendorMock::start().await;
        primary.openai_reply("from primary", 1).await;
        backup.openai_reply("from backup", 2).await;

        let (gateway, _store) = gateway(ConfigFactory::gateway(vec![
            ConfigFactory::throttled_provider("primary", "openai", &primary.uri(), 1),
            ConfigFactory::provider("backup", "openai", &backup.uri()),
        ]));
        let dispatcher = gateway.dispatcher();

        // Idle tie goes to registry order, then the least loaded wins
        let first = assert_ok!(dispatcher.dispatch(&RequestFactory::chat("one")).await);
        let second = assert_ok!(dispatcher.dispatch(&RequestFactory::chat("two")).await);
        // Tied again at one request each, but primary is at its ceiling
        let third = assert_ok!(dispatcher.dispatch(&RequestFactory::chat("three")).await);

        assert_eq!(first.provider, "primary");
        assert_eq!(second.provider, "backup");
        assert_eq!(third.provider, "backup");
        assert_eq!(dispatcher.state().limiter.current_requests("backup"), 2);
    }

    #[tokio::test]
    async fn test_all_throttled_is_rate_limit_error() {
        let only = VendorMock::start().await;
        only.openai_reply("ok", 1).await;

        let (gateway, store) = gateway(ConfigFactory::gateway(vec![
            ConfigFactory::throttled_provider("only", "openai", &only.uri(), 1),
        ]));

        assert_ok!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("one"))
                .await
        );
        let err = assert_err!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("two"))
                .await
        );
        assert!(matches!(err, GatewayError::RateLimitExceeded(_)));

        let history = store.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[2].metadata.status, Some(DispatchStatus::Failed));
    }

    #[tokio::test]
    async fn test_unknown_model_has_no_provider() {
        let primary = VendorMock::start().await;
        primary.openai_reply("unused", 0).await;

        let (gateway, store) = gateway(ConfigFactory::gateway(vec![
            ConfigFactory::provider("primary", "openai", &primary.uri()),
        ]));

        let request = ChatRequest::new(
            "not-served",
            vec![ChatMessage::user("hello")],
            "user-1",
            ORG_ID,
        );
        let err = assert_err!(gateway.dispatcher().dispatch(&request).await);
        assert!(matches!(err, GatewayError::NoProviderAvailable(_)));
        assert_eq!(store.history_len(), 0);
    }
}
