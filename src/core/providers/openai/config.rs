//! OpenAI defaults

use crate::core::providers::base::VendorDefaults;
use crate::core::types::RateLimitCeiling;

pub const OPENAI_DEFAULTS: VendorDefaults = VendorDefaults {
    name: "openai",
    api_base: "https://api.openai.com/v1",
    api_key_env: "OPENAI_API_KEY",
    models: &[
        "gpt-4o",
        "gpt-4o-mini",
        "gpt-4-turbo",
        "gpt-4",
        "gpt-3.5-turbo",
    ],
    ceiling: RateLimitCeiling::new(3500, 10000, 90000, 1_000_000),
};
