//! DeepSeek defaults

use crate::core::providers::base::VendorDefaults;
use crate::core::types::RateLimitCeiling;

pub const DEEPSEEK_DEFAULTS: VendorDefaults = VendorDefaults {
    name: "deepseek",
    api_base: "https://api.deepseek.com/v1",
    api_key_env: "DEEPSEEK_API_KEY",
    models: &["deepseek-chat", "deepseek-reasoner"],
    ceiling: RateLimitCeiling::new(1000, 10000, 60000, 1_000_000),
};
