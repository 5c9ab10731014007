//! Anthropic Provider Implementation

use async_trait::async_trait;
use serde_json::json;

use crate::core::providers::base::{BaseConfig, HttpClient};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::provider::{LLMProvider, validate_request};
use crate::core::types::{ChatRequest, ChatResponse, RateLimitCeiling};

use super::client::{transform_chat_request, transform_chat_response};
use super::config::{ANTHROPIC_API_VERSION, ANTHROPIC_DEFAULTS, ANTHROPIC_PING_MODEL};

#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    name: String,
    api_base: String,
    api_key: Option<String>,
    models: Vec<String>,
    ceiling: RateLimitCeiling,
    http: HttpClient,
}

impl AnthropicProvider {
    pub fn new(config: &BaseConfig) -> Result<Self, ProviderError> {
        let defaults = &ANTHROPIC_DEFAULTS;
        let name = config.effective_name(defaults);
        let http = HttpClient::new(&name, config.timeout_duration())?;

        Ok(Self {
            api_base: config.effective_api_base(defaults),
            api_key: config.effective_api_key(defaults),
            models: config.effective_models(defaults),
            ceiling: config.effective_ceiling(defaults),
            name,
            http,
        })
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("anthropic-version", ANTHROPIC_API_VERSION.to_string())];
        if let Some(key) = &self.api_key {
            headers.push(("x-api-key", key.clone()));
        }
        headers
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.api_base)
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn models(&self) -> &[String] {
        &self.models
    }

    fn rate_limit(&self) -> RateLimitCeiling {
        self.ceiling
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        validate_request(self, request)?;

        let body = transform_chat_request(request);
        let raw = self
            .http
            .post_json(&self.messages_url(), &self.headers(), &body)
            .await?;

        transform_chat_response(&self.name, raw)
    }

    async fn is_available(&self) -> bool {
        let body = json!({
            "model": ANTHROPIC_PING_MODEL,
            "max_tokens": 1,
            "messages": [{"role": "user", "content": "Hi"}],
        });
        self.http
            .post_json(&self.messages_url(), &self.headers(), &body)
            .await
            .is_ok()
    }
}
