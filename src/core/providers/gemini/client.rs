//! Gemini request/response translation

use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{ChatRequest, ChatResponse, FinishReason, MessageRole, Usage};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: UsageMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

/// Split turns into system instruction, history and the final prompt
///
/// The last non-system turn is the prompt; earlier turns become history with
/// `assistant` renamed to `model`.
pub fn transform_chat_request(request: &ChatRequest) -> Value {
    let mut system_instruction = None;
    let mut turns = Vec::with_capacity(request.messages.len());

    for message in &request.messages {
        match message.role {
            MessageRole::System => system_instruction = Some(message.content.as_str()),
            role => turns.push((role, message.content.as_str())),
        }
    }

    let prompt = turns.pop().map(|(_, content)| content).unwrap_or_default();
    let mut contents: Vec<Value> = turns
        .into_iter()
        .map(|(role, content)| {
            let role = match role {
                MessageRole::Assistant => "model",
                _ => "user",
            };
            json!({"role": role, "parts": [{"text": content}]})
        })
        .collect();
    contents.push(json!({"role": "user", "parts": [{"text": prompt}]}));

    let mut body = json!({
        "contents": contents,
        "generationConfig": {
            "temperature": request.effective_temperature(),
            "maxOutputTokens": request.effective_max_tokens(),
        },
    });
    if let Some(system) = system_instruction {
        body["systemInstruction"] = json!({"parts": [{"text": system}]});
    }
    body
}

pub fn transform_chat_response(
    provider: &str,
    model: &str,
    raw: Value,
) -> Result<ChatResponse, ProviderError> {
    let body: GenerateBody = serde_json::from_value(raw).map_err(|e| {
        ProviderError::unavailable(provider, format!("Failed to parse response: {}", e))
    })?;

    let candidate = body.candidates.into_iter().next();
    let finish_reason = map_finish_reason(
        candidate.as_ref().and_then(|c| c.finish_reason.as_deref()),
    );
    let content: String = candidate
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(ProviderError::unavailable(
            provider,
            "No response content received",
        ));
    }

    let usage = body.usage_metadata;
    Ok(ChatResponse {
        id: format!("google-{}", chrono::Utc::now().timestamp_millis()),
        model: model.to_string(),
        content,
        usage: Usage {
            prompt_tokens: usage.prompt_token_count,
            completion_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        },
        finish_reason,
        provider: provider.to_string(),
    })
}

pub fn map_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("STOP") => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") => FinishReason::ContentFilter,
        _ => FinishReason::Error,
    }
}
