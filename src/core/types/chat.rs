//! Chat request and response types

use super::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// Default sampling temperature when the caller leaves it unset
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion budget when the caller leaves it unset
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Chat completion request as seen by the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Requested model identifier
    pub model: String,
    /// Ordered conversation turns
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Authenticated user issuing the request
    pub user_id: String,
    /// Organization the request is billed to
    pub organization_id: String,
}

impl ChatRequest {
    /// Create a request with default sampling parameters
    pub fn new(
        model: impl Into<String>,
        messages: Vec<ChatMessage>,
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
            user_id: user_id.into(),
            organization_id: organization_id.into(),
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the completion token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Temperature to send upstream
    pub fn effective_temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Token budget to send upstream
    pub fn effective_max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Content of the most recent turn, empty when there are no messages
    pub fn last_message_content(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

/// Token usage reported by a provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Prompt plus completion
    pub total_tokens: u32,
}

impl Usage {
    /// Build usage from prompt/completion counts
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// Canonical reason a model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop or stop sequence
    Stop,
    /// Token budget exhausted
    Length,
    /// Vendor safety filter
    ContentFilter,
    /// Anything the vendor reported that is not one of the above
    Error,
}

impl FinishReason {
    /// Wire name of the reason
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::Error => "error",
        }
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized chat completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Vendor response id
    pub id: String,
    /// Model that produced the completion
    pub model: String,
    /// Completion text
    pub content: String,
    /// Token usage
    pub usage: Usage,
    /// Why generation stopped
    pub finish_reason: FinishReason,
    /// Registry name of the provider that served the request
    pub provider: String,
}
