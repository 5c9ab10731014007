//! Mistral defaults

use crate::core::providers::base::VendorDefaults;
use crate::core::types::RateLimitCeiling;

pub const MISTRAL_DEFAULTS: VendorDefaults = VendorDefaults {
    name: "mistral",
    api_base: "https://api.mistral.ai/v1",
    api_key_env: "MISTRAL_API_KEY",
    models: &[
        "mistral-large-latest",
        "mistral-medium-latest",
        "mistral-small-latest",
        "open-mistral-7b",
        "open-mixtral-8x7b",
        "open-mixtral-8x22b",
    ],
    ceiling: RateLimitCeiling::new(1000, 10000, 30000, 500_000),
};
