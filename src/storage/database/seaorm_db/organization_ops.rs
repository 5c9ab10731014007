use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, chat_history, organization, subscription_tier};
use super::types::SeaOrmStore;
use crate::core::traits::OrganizationStore;
use crate::core::types::{MessageRole, OrganizationRecord};
use crate::utils::error::{GatewayError, Result};

impl SeaOrmStore {
    /// Insert or replace an organization's subscription fields
    pub async fn upsert_organization(&self, record: &OrganizationRecord) -> Result<()> {
        debug!("Upserting organization: {}", record.id);

        let active_model = organization::ActiveModel {
            id: Set(record.id.clone()),
            name: NotSet,
            subscription_tier: Set(record.subscription_tier.clone()),
            subscription_status: Set(record.subscription_status.clone()),
            subscription_end_date: Set(record.subscription_end_date),
            created_at: Set(Utc::now()),
        };

        entities::Organization::insert(active_model)
            .on_conflict(
                OnConflict::column(organization::Column::Id)
                    .update_columns([
                        organization::Column::SubscriptionTier,
                        organization::Column::SubscriptionStatus,
                        organization::Column::SubscriptionEndDate,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(())
    }

    /// Insert or replace a tier ceiling; `None` means unlimited
    pub async fn upsert_tier(&self, name: &str, limit: Option<u64>) -> Result<()> {
        debug!("Upserting subscription tier: {}", name);

        let limit = limit
            .map(i64::try_from)
            .transpose()
            .map_err(|_| GatewayError::validation(format!("Tier limit out of range: {}", name)))?;

        let active_model = subscription_tier::ActiveModel {
            name: Set(name.to_string()),
            max_ai_requests_per_day: Set(limit),
        };

        entities::SubscriptionTier::insert(active_model)
            .on_conflict(
                OnConflict::column(subscription_tier::Column::Name)
                    .update_column(subscription_tier::Column::MaxAiRequestsPerDay)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(())
    }
}

#[async_trait]
impl OrganizationStore for SeaOrmStore {
    async fn find_organization(
        &self,
        organization_id: &str,
    ) -> Result<Option<OrganizationRecord>> {
        debug!("Finding organization by ID: {}", organization_id);

        let model = entities::Organization::find_by_id(organization_id.to_string())
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn daily_request_limit(&self, tier: &str) -> Result<Option<u64>> {
        let model = entities::SubscriptionTier::find_by_id(tier.to_string())
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.and_then(|m| m.daily_limit()))
    }

    async fn count_requests_between(
        &self,
        organization_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64> {
        entities::ChatHistory::find()
            .filter(chat_history::Column::OrganizationId.eq(organization_id))
            .filter(chat_history::Column::Role.eq(MessageRole::User.as_str()))
            .filter(chat_history::Column::CreatedAt.gte(from))
            .filter(chat_history::Column::CreatedAt.lt(to))
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)
    }
}
