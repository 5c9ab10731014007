//! Gemini Provider Implementation

use async_trait::async_trait;

use crate::core::providers::base::{BaseConfig, HttpClient};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::provider::{LLMProvider, validate_request};
use crate::core::types::{ChatRequest, ChatResponse, RateLimitCeiling};

use super::client::{transform_chat_request, transform_chat_response};
use super::config::{GEMINI_API_VERSION, GEMINI_DEFAULTS};

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    name: String,
    api_base: String,
    api_key: Option<String>,
    models: Vec<String>,
    ceiling: RateLimitCeiling,
    http: HttpClient,
}

impl GeminiProvider {
    pub fn new(config: &BaseConfig) -> Result<Self, ProviderError> {
        let defaults = &GEMINI_DEFAULTS;
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
        match &self.api_key {
            Some(key) => vec![("x-goog-api-key", key.clone())],
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
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

        let url = format!(
            "{}/{}/models/{}:generateContent",
            self.api_base, GEMINI_API_VERSION, request.model
        );
        let body = transform_chat_request(request);
        let raw = self.http.post_json(&url, &self.headers(), &body).await?;

        transform_chat_response(&self.name, &request.model, raw)
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/{}/models", self.api_base, GEMINI_API_VERSION);
        self.http.ping(&url, &self.headers()).await.is_ok()
    }
}
