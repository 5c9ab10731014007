//! Storage collaborator traits used by the access policy and dispatcher

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::types::{ChatHistoryEntry, OrganizationRecord};
use crate::utils::error::Result;

/// Read side of organization subscriptions and usage
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// Look up an organization, `None` when it does not exist
    async fn find_organization(&self, organization_id: &str)
    -> Result<Option<OrganizationRecord>>;

    /// Daily request ceiling for a tier; `None` means unlimited
    async fn daily_request_limit(&self, tier: &str) -> Result<Option<u64>>;

    /// Number of user requests the organization made in `[from, to)`
    async fn count_requests_between(
        &self,
        organization_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64>;
}

/// Append-only chat history sink
#[async_trait]
pub trait ChatHistoryStore: Send + Sync {
    async fn append(&self, entry: ChatHistoryEntry) -> Result<()>;
}
