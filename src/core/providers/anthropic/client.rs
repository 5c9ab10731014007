//! Anthropic request/response translation

use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{ChatRequest, ChatResponse, FinishReason, MessageRole, Usage};

#[derive(Debug, Deserialize)]
struct MessagesBody {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    #[serde(default)]
    usage: UsageBody,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UsageBody {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

/// Build a Messages API body; system turns go to the top-level `system` field
pub fn transform_chat_request(request: &ChatRequest) -> Value {
    let mut system = None;
    let mut messages = Vec::with_capacity(request.messages.len());

    for message in &request.messages {
        match message.role {
            MessageRole::System => system = Some(message.content.as_str()),
            role => messages.push(json!({
                "role": role.as_str(),
                "content": message.content,
            })),
        }
    }

    let mut body = json!({
        "model": request.model,
        "max_tokens": request.effective_max_tokens(),
        "temperature": request.effective_temperature(),
        "messages": messages,
    });
    if let Some(system) = system {
        body["system"] = json!(system);
    }
    body
}

pub fn transform_chat_response(provider: &str, raw: Value) -> Result<ChatResponse, ProviderError> {
    let body: MessagesBody = serde_json::from_value(raw).map_err(|e| {
        ProviderError::unavailable(provider, format!("Failed to parse response: {}", e))
    })?;

    let content = match body.content.into_iter().next() {
        Some(ContentBlock { kind, text: Some(text) }) if kind == "text" => text,
        _ => {
            return Err(ProviderError::unavailable(
                provider,
                "Unexpected response format",
            ));
        }
    };

    Ok(ChatResponse {
        id: body.id,
        model: body.model,
        content,
        usage: Usage::new(body.usage.input_tokens, body.usage.output_tokens),
        finish_reason: map_stop_reason(body.stop_reason.as_deref()),
        provider: provider.to_string(),
    })
}

pub fn map_stop_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("end_turn") | Some("stop_sequence") => FinishReason::Stop,
        Some("max_tokens") => FinishReason::Length,
        _ => FinishReason::Error,
    }
}
