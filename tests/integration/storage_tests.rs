//! Storage backends feeding the access policy and the history log

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::common::fixtures::ORG_ID;
    use crate::common::{ConfigFactory, RequestFactory, VendorMock};
    use crate::{assert_err, assert_ok};
    use llm_dispatch::config::{DatabaseConfig, SeedConfig, StorageConfig, TierSeed};
    use llm_dispatch::core::access::AccessError;
    use llm_dispatch::core::traits::OrganizationStore;
    use llm_dispatch::storage::StorageLayer;
    use llm_dispatch::{Gateway, GatewayError};

    fn seed(limit: Option<u64>) -> SeedConfig {
        let mut expired = ConfigFactory::organization("org-expired", "starter", "active");
        expired.subscription_end_date = Some(Utc::now() - Duration::days(1));

        SeedConfig {
            tiers: vec![
                TierSeed {
                    name: "starter".to_string(),
                    max_ai_requests_per_day: limit,
                },
                TierSeed {
                    name: "free".to_string(),
                    max_ai_requests_per_day: Some(0),
                },
            ],
            organizations: vec![
                ConfigFactory::organization(ORG_ID, "starter", "active"),
                ConfigFactory::organization("org-canceled", "starter", "canceled"),
                ConfigFactory::organization("org-free", "free", "past_due"),
                expired,
            ],
        }
    }

    fn database_storage(limit: Option<u64>) -> StorageConfig {
        StorageConfig {
            database: DatabaseConfig {
                enabled: true,
                url: "sqlite::memory:".to_string(),
                ..DatabaseConfig::default()
            },
            seed: seed(limit),
        }
    }

    async fn gateway(server: &VendorMock, storage: StorageConfig) -> Gateway {
        let config = ConfigFactory::with_storage(
            vec![ConfigFactory::provider("primary", "openai", &server.uri())],
            storage,
        );
        let layer = assert_ok!(StorageLayer::new(config.storage()).await);
        assert_ok!(Gateway::with_storage(config, layer))
    }

    #[tokio::test]
    async fn test_daily_quota_enforced_from_database() {
        let server = VendorMock::start().await;
        server.openai_reply("ok", 2).await;
        let gateway = gateway(&server, database_storage(Some(2))).await;
        assert_eq!(gateway.storage().backend_name(), "database");

        for content in ["one", "two"] {
            assert_ok!(
                gateway
                    .dispatcher()
                    .dispatch(&RequestFactory::chat(content))
                    .await
            );
        }

        let err = assert_err!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("three"))
                .await
        );
        match err {
            GatewayError::Access(AccessError::QuotaExceeded { used, limit, .. }) => {
                assert_eq!(used, 2);
                assert_eq!(limit, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let now = Utc::now();
        let used = assert_ok!(
            gateway
                .storage()
                .organizations()
                .count_requests_between(ORG_ID, now - Duration::hours(1), now)
                .await
        );
        assert_eq!(used, 2);
    }

    #[tokio::test]
    async fn test_subscription_rules_apply_on_both_backends() {
        let server = VendorMock::start().await;
        server.openai_reply("ok", 2).await;

        let memory = StorageConfig {
            seed: seed(None),
            ..StorageConfig::default()
        };

        for storage in [memory, database_storage(None)] {
            let gateway = gateway(&server, storage).await;
            let dispatcher = gateway.dispatcher();

            let canceled = assert_err!(
                dispatcher
                    .dispatch(&RequestFactory::for_org("org-canceled", "hi"))
                    .await
            );
            assert!(matches!(
                canceled,
                GatewayError::Access(AccessError::SubscriptionExpired { .. })
            ));

            let expired = assert_err!(
                dispatcher
                    .dispatch(&RequestFactory::for_org("org-expired", "hi"))
                    .await
            );
            assert!(matches!(
                expired,
                GatewayError::Access(AccessError::SubscriptionExpired { .. })
            ));

            let missing = assert_err!(
                dispatcher
                    .dispatch(&RequestFactory::for_org("org-missing", "hi"))
                    .await
            );
            assert!(matches!(
                missing,
                GatewayError::Access(AccessError::OrganizationNotFound { .. })
            ));

            // Free tier is served whatever its billing status, and a zero ceiling is unlimited
            assert_ok!(
                dispatcher
                    .dispatch(&RequestFactory::for_org("org-free", "hi"))
                    .await
            );
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let config = database_storage(Some(5));
        let storage = assert_ok!(StorageLayer::new(&config).await);
        assert_ok!(storage.seed(&config.seed).await);

        let organizations = storage.organizations();
        assert_eq!(
            assert_ok!(organizations.daily_request_limit("starter").await),
            Some(5)
        );
        let org = assert_ok!(organizations.find_organization(ORG_ID).await)
            .expect("seeded organization");
        assert_eq!(org.subscription_tier, "starter");
        assert_ok!(storage.health_check().await);
    }
}
