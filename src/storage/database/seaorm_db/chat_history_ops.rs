use async_trait::async_trait;
use sea_orm::*;

use super::super::entities::{self, chat_history};
use super::types::SeaOrmStore;
use crate::core::traits::ChatHistoryStore;
use crate::core::types::{ChatHistoryEntry, HistoryMetadata, MessageRole};
use crate::utils::error::{GatewayError, Result};

impl SeaOrmStore {
    /// History rows of one organization, oldest first
    pub async fn list_history(&self, organization_id: &str) -> Result<Vec<ChatHistoryEntry>> {
        let models = entities::ChatHistory::find()
            .filter(chat_history::Column::OrganizationId.eq(organization_id))
            .order_by_asc(chat_history::Column::Id)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        models.into_iter().map(to_entry).collect()
    }
}

fn to_entry(model: chat_history::Model) -> Result<ChatHistoryEntry> {
    let role: MessageRole = model.role.parse().map_err(GatewayError::storage)?;
    let metadata: HistoryMetadata = serde_json::from_value(model.metadata)?;

    Ok(ChatHistoryEntry {
        organization_id: model.organization_id,
        user_id: model.user_id,
        role,
        content: model.content,
        metadata,
        created_at: model.created_at,
    })
}

#[async_trait]
impl ChatHistoryStore for SeaOrmStore {
    async fn append(&self, entry: ChatHistoryEntry) -> Result<()> {
        let active_model = chat_history::ActiveModel {
            id: NotSet,
            organization_id: Set(entry.organization_id),
            user_id: Set(entry.user_id),
            role: Set(entry.role.as_str().to_string()),
            content: Set(entry.content),
            metadata: Set(serde_json::to_value(&entry.metadata)?),
            created_at: Set(entry.created_at),
        };

        entities::ChatHistory::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(())
    }
}
