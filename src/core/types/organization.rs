//! Organization subscription snapshot consumed by the access policy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription status that admits requests on paid tiers
pub const ACTIVE_STATUS: &str = "active";

/// Tier that is served regardless of subscription status
pub const FREE_TIER: &str = "free";

/// Subscription fields of an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRecord {
    pub id: String,
    /// Tier name, matches a row in the tier table
    pub subscription_tier: String,
    /// Billing status as reported by the payment system
    pub subscription_status: String,
    /// Absent for open-ended subscriptions
    pub subscription_end_date: Option<DateTime<Utc>>,
}

impl OrganizationRecord {
    pub fn new(
        id: impl Into<String>,
        subscription_tier: impl Into<String>,
        subscription_status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subscription_tier: subscription_tier.into(),
            subscription_status: subscription_status.into(),
            subscription_end_date: None,
        }
    }

    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.subscription_end_date = Some(end);
        self
    }

    pub fn is_active(&self) -> bool {
        self.subscription_status == ACTIVE_STATUS
    }

    pub fn is_free_tier(&self) -> bool {
        self.subscription_tier == FREE_TIER
    }
}
