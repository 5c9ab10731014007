//! Access policy check

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::{AccessError, utc_day_bounds};
use crate::core::traits::OrganizationStore;
use crate::utils::error::Result;

/// Access policy backed by an [`OrganizationStore`]
#[derive(Clone)]
pub struct AccessPolicy {
    store: Arc<dyn OrganizationStore>,
}

impl AccessPolicy {
    pub fn new(store: Arc<dyn OrganizationStore>) -> Self {
        Self { store }
    }

    /// Check access as of now
    pub async fn check_access(&self, user_id: &str, organization_id: &str) -> Result<()> {
        self.check_access_at(user_id, organization_id, Utc::now())
            .await
    }

    /// Check access as of `now`
    pub async fn check_access_at(
        &self,
        user_id: &str,
        organization_id: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let org = self
            .store
            .find_organization(organization_id)
            .await?
            .ok_or_else(|| AccessError::OrganizationNotFound {
                organization_id: organization_id.to_string(),
            })?;

        if !org.is_active() && !org.is_free_tier() {
            return Err(AccessError::SubscriptionExpired {
                organization_id: organization_id.to_string(),
                reason: format!("subscription status is {}", org.subscription_status),
            }
            .into());
        }

        if let Some(end) = org.subscription_end_date {
            if end < now {
                return Err(AccessError::SubscriptionExpired {
                    organization_id: organization_id.to_string(),
                    reason: format!("subscription ended at {}", end.to_rfc3339()),
                }
                .into());
            }
        }

        // Zero is treated like an absent ceiling
        let limit = match self
            .store
            .daily_request_limit(&org.subscription_tier)
            .await?
        {
            Some(limit) if limit > 0 => limit,
            _ => return Ok(()),
        };

        let (from, to) = utc_day_bounds(now);
        let used = self
            .store
            .count_requests_between(organization_id, from, to)
            .await?;

        debug!(
            user_id,
            organization_id,
            used,
            limit,
            "daily usage checked"
        );

        if used >= limit {
            return Err(AccessError::QuotaExceeded {
                organization_id: organization_id.to_string(),
                used,
                limit,
            }
            .into());
        }

        Ok(())
    }
}
