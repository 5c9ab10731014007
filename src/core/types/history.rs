//! Chat history records written after each dispatch

use super::chat::{ChatRequest, ChatResponse, Usage};
use super::message::MessageRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Success,
    Failed,
}

/// Metadata attached to a history row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryMetadata {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DispatchStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// One row of chat history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub organization_id: String,
    pub user_id: String,
    pub role: MessageRole,
    pub content: String,
    pub metadata: HistoryMetadata,
    pub created_at: DateTime<Utc>,
}

impl ChatHistoryEntry {
    /// User turn for a request, tagged with the outcome
    pub fn user_turn(
        request: &ChatRequest,
        response: Option<&ChatResponse>,
        status: DispatchStatus,
        error: Option<String>,
    ) -> Self {
        Self {
            organization_id: request.organization_id.clone(),
            user_id: request.user_id.clone(),
            role: MessageRole::User,
            content: request.last_message_content().to_string(),
            metadata: HistoryMetadata {
                model: request.model.clone(),
                provider: response.map(|r| r.provider.clone()),
                status: Some(status),
                error,
                usage: response.map(|r| r.usage),
            },
            created_at: Utc::now(),
        }
    }

    /// Assistant turn carrying the completion
    pub fn assistant_turn(request: &ChatRequest, response: &ChatResponse) -> Self {
        Self {
            organization_id: request.organization_id.clone(),
            user_id: request.user_id.clone(),
            role: MessageRole::Assistant,
            content: response.content.clone(),
            metadata: HistoryMetadata {
                model: response.model.clone(),
                provider: Some(response.provider.clone()),
                status: None,
                error: None,
                usage: Some(response.usage),
            },
            created_at: Utc::now(),
        }
    }
}
