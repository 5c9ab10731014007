//! In-process storage backend
//!
//! Default when no database is configured. Nothing survives a restart.
//! History is never pruned and quota counts scan all of it, so this backend
//! is meant for development and tests, not production traffic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::core::traits::{ChatHistoryStore, OrganizationStore};
use crate::core::types::{ChatHistoryEntry, MessageRole, OrganizationRecord};
use crate::utils::error::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    organizations: RwLock<HashMap<String, OrganizationRecord>>,
    tier_limits: RwLock<HashMap<String, Option<u64>>>,
    history: RwLock<Vec<ChatHistoryEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_organization(&self, organization: OrganizationRecord) {
        self.organizations
            .write()
            .insert(organization.id.clone(), organization);
    }

    /// Set a tier's daily ceiling; `None` means unlimited
    pub fn set_tier_limit(&self, tier: impl Into<String>, limit: Option<u64>) {
        self.tier_limits.write().insert(tier.into(), limit);
    }

    /// All history rows, in append order
    pub fn history(&self) -> Vec<ChatHistoryEntry> {
        self.history.read().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }
}

#[async_trait]
impl OrganizationStore for MemoryStore {
    async fn find_organization(
        &self,
        organization_id: &str,
    ) -> Result<Option<OrganizationRecord>> {
        Ok(self.organizations.read().get(organization_id).cloned())
    }

    async fn daily_request_limit(&self, tier: &str) -> Result<Option<u64>> {
        Ok(self.tier_limits.read().get(tier).copied().flatten())
    }

    async fn count_requests_between(
        &self,
        organization_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64> {
        let count = self
            .history
            .read()
            .iter()
            .filter(|e| {
                e.organization_id == organization_id
                    && e.role == MessageRole::User
                    && e.created_at >= from
                    && e.created_at < to
            })
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl ChatHistoryStore for MemoryStore {
    async fn append(&self, entry: ChatHistoryEntry) -> Result<()> {
        self.history.write().push(entry);
        Ok(())
    }
}
