//! Static per-provider rate-limit ceilings

use serde::{Deserialize, Serialize};

/// Vendor-advertised request and token budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitCeiling {
    /// Requests allowed per minute
    pub requests_per_minute: u32,
    /// Requests allowed per day
    pub requests_per_day: u32,
    /// Tokens allowed per minute
    pub tokens_per_minute: u32,
    /// Tokens allowed per day
    pub tokens_per_day: u32,
}

impl RateLimitCeiling {
    /// Build a ceiling from rpm/rpd/tpm/tpd
    pub const fn new(
        requests_per_minute: u32,
        requests_per_day: u32,
        tokens_per_minute: u32,
        tokens_per_day: u32,
    ) -> Self {
        Self {
            requests_per_minute,
            requests_per_day,
            tokens_per_minute,
            tokens_per_day,
        }
    }
}
