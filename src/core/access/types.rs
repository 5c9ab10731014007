//! Access policy errors and helpers

use chrono::{DateTime, Duration, NaiveTime, Utc};
use thiserror::Error;

/// Why an organization was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Organization not found: {organization_id}")]
    OrganizationNotFound { organization_id: String },

    #[error("Subscription expired or inactive for {organization_id}: {reason}")]
    SubscriptionExpired {
        organization_id: String,
        reason: String,
    },

    #[error("Daily request limit exceeded for {organization_id}: {used}/{limit}")]
    QuotaExceeded {
        organization_id: String,
        used: u64,
        limit: u64,
    },
}

/// UTC day window `[00:00:00.000, 23:59:59.999)` containing `now`
pub fn utc_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}
