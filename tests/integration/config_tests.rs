//! Configuration loading into a running gateway

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::common::RequestFactory;
    use crate::common::VendorMock;
    use crate::{assert_err, assert_ok};
    use llm_dispatch::{Config, Gateway, GatewayError};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[tokio::test]
    async fn test_gateway_from_yaml_file() {
        let server = VendorMock::start().await;
        server.openai_reply("configured", 1).await;

        let file = write_config(&format!(
            r#"
providers:
  - name: "local"
    provider_type: "openai"
    api_key: "sk-local"
    base_url: "{}"
    models: ["chat-model"]
  - name: "disabled"
    provider_type: "anthropic"
    enabled: false

storage:
  seed:
    tiers:
      - name: "pro"
    organizations:
      - id: "org-1"
        subscription_tier: "pro"
"#,
            server.uri()
        ));

        let config = assert_ok!(Config::load(file.path()).await);
        let gateway = assert_ok!(Gateway::new(config).await);

        assert_eq!(gateway.dispatcher().state().registry.names(), vec!["local"]);

        let response = assert_ok!(
            gateway
                .dispatcher()
                .dispatch(&RequestFactory::chat("hello"))
                .await
        );
        assert_eq!(response.content, "configured");
    }

    #[tokio::test]
    async fn test_example_config_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/gateway.yaml.example");
        let config = assert_ok!(Config::from_file(path).await);

        assert!(!config.providers().is_empty());
        assert!(config.providers().iter().any(|p| p.enabled));
        assert_eq!(config.resilience().circuit_breaker.failure_threshold, 5);
        assert_eq!(config.resilience().rate_limit.window_secs, 60);
    }

    #[tokio::test]
    async fn test_invalid_configs_rejected() {
        let cases = [
            "providers: []",
            r#"
providers:
  - name: "only"
    provider_type: "openai"
    enabled: false
"#,
            r#"
providers:
  - name: "a"
    provider_type: "openai"
  - name: "a"
    provider_type: "mistral"
"#,
            r#"
providers:
  - name: "a"
    provider_type: "openai"
    base_url: "ftp://example.com"
"#,
            r#"
providers:
  - name: "a"
    provider_type: "openai"
resilience:
  circuit_breaker:
    failure_threshold: 0
"#,
        ];

        for yaml in cases {
            let file = write_config(yaml);
            let err = assert_err!(Config::from_file(file.path()).await);
            assert!(matches!(err, GatewayError::Config(_)), "{}", yaml);
        }
    }
}
