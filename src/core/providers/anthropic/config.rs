//! Anthropic defaults

use crate::core::providers::base::VendorDefaults;
use crate::core::types::RateLimitCeiling;

/// Value of the `anthropic-version` header
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Cheapest model, used for liveness checks
pub const ANTHROPIC_PING_MODEL: &str = "claude-3-haiku-20240307";

pub const ANTHROPIC_DEFAULTS: VendorDefaults = VendorDefaults {
    name: "anthropic",
    api_base: "https://api.anthropic.com",
    api_key_env: "ANTHROPIC_API_KEY",
    models: &[
        "claude-3-5-sonnet-20241022",
        "claude-3-5-haiku-20241022",
        "claude-3-opus-20240229",
        "claude-3-sonnet-20240229",
        "claude-3-haiku-20240307",
    ],
    ceiling: RateLimitCeiling::new(1000, 10000, 40000, 300_000),
};
