//! OpenAI-compatible chat completions adapter
//!
//! Used by every vendor that speaks the `/chat/completions` wire format
//! (OpenAI itself, Mistral, DeepSeek).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::config::{BaseConfig, VendorDefaults};
use super::http::HttpClient;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::provider::{LLMProvider, validate_request};
use crate::core::types::{ChatRequest, ChatResponse, FinishReason, RateLimitCeiling, Usage};

#[derive(Debug, Clone)]
pub struct OpenAICompatibleProvider {
    name: String,
    api_base: String,
    api_key: Option<String>,
    models: Vec<String>,
    ceiling: RateLimitCeiling,
    http: HttpClient,
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<UsageBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageBody {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

impl OpenAICompatibleProvider {
    pub fn new(config: &BaseConfig, defaults: &VendorDefaults) -> Result<Self, ProviderError> {
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
            Some(key) => vec![("Authorization", format!("Bearer {}", key))],
            None => Vec::new(),
        }
    }

    pub fn transform_request(request: &ChatRequest) -> Value {
        json!({
            "model": request.model,
            "messages": request.messages,
            "temperature": request.effective_temperature(),
            "max_tokens": request.effective_max_tokens(),
        })
    }

    pub fn transform_response(&self, raw: Value) -> Result<ChatResponse, ProviderError> {
        let body: CompletionBody = serde_json::from_value(raw).map_err(|e| {
            ProviderError::unavailable(&self.name, format!("Failed to parse response: {}", e))
        })?;

        let choice = body.choices.into_iter().next();
        let finish_reason = map_finish_reason(
            choice.as_ref().and_then(|c| c.finish_reason.as_deref()),
        );
        let content = choice
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ProviderError::unavailable(&self.name, "No response content received"))?;

        let usage = body
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(ChatResponse {
            id: body.id,
            model: body.model,
            content,
            usage,
            finish_reason,
            provider: self.name.clone(),
        })
    }
}

pub fn map_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Error,
    }
}

#[async_trait]
impl LLMProvider for OpenAICompatibleProvider {
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

        let url = format!("{}/chat/completions", self.api_base);
        let body = Self::transform_request(request);
        let raw = self.http.post_json(&url, &self.headers(), &body).await?;

        self.transform_response(raw)
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/models", self.api_base);
        self.http.ping(&url, &self.headers()).await.is_ok()
    }
}
