//! Gemini defaults

use crate::core::providers::base::VendorDefaults;
use crate::core::types::RateLimitCeiling;

pub const GEMINI_API_VERSION: &str = "v1beta";

pub const GEMINI_DEFAULTS: VendorDefaults = VendorDefaults {
    name: "google",
    api_base: "https://generativelanguage.googleapis.com",
    api_key_env: "GOOGLE_AI_API_KEY",
    models: &["gemini-1.5-pro", "gemini-1.5-flash", "gemini-1.0-pro"],
    ceiling: RateLimitCeiling::new(1500, 50000, 32000, 1_000_000),
};
