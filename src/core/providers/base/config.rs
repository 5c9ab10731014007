//! Configuration shared by every provider adapter

use crate::core::types::RateLimitCeiling;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Compile-time defaults each vendor module publishes
#[derive(Debug, Clone, Copy)]
pub struct VendorDefaults {
    /// Registry name used when configuration does not override it
    pub name: &'static str,
    pub api_base: &'static str,
    /// Environment variable holding the API key
    pub api_key_env: &'static str,
    pub models: &'static [&'static str],
    pub ceiling: RateLimitCeiling,
}

/// Optional per-field override of a vendor ceiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeilingOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpd: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpd: Option<u32>,
}

impl CeilingOverride {
    /// Apply the set fields on top of `base`
    pub fn apply(&self, base: RateLimitCeiling) -> RateLimitCeiling {
        RateLimitCeiling {
            requests_per_minute: self.rpm.unwrap_or(base.requests_per_minute),
            requests_per_day: self.rpd.unwrap_or(base.requests_per_day),
            tokens_per_minute: self.tpm.unwrap_or(base.tokens_per_minute),
            tokens_per_day: self.tpd.unwrap_or(base.tokens_per_day),
        }
    }
}

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseConfig {
    /// Registry name; defaults to the vendor name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Request deadline in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Replaces the vendor model list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,

    #[serde(default)]
    pub rate_limit: CeilingOverride,
}

fn default_timeout() -> u64 {
    60
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            name: None,
            api_key: None,
            api_base: None,
            timeout: default_timeout(),
            models: None,
            rate_limit: CeilingOverride::default(),
        }
    }
}

impl BaseConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = Some(models.into_iter().map(Into::into).collect());
        self
    }

    pub fn effective_name(&self, defaults: &VendorDefaults) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| defaults.name.to_string())
    }

    /// Configured key, falling back to the vendor environment variable
    pub fn effective_api_key(&self, defaults: &VendorDefaults) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(defaults.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }

    pub fn effective_api_base(&self, defaults: &VendorDefaults) -> String {
        self.api_base
            .as_deref()
            .unwrap_or(defaults.api_base)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn effective_models(&self, defaults: &VendorDefaults) -> Vec<String> {
        match &self.models {
            Some(models) if !models.is_empty() => models.clone(),
            _ => defaults.models.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn effective_ceiling(&self, defaults: &VendorDefaults) -> RateLimitCeiling {
        self.rate_limit.apply(defaults.ceiling)
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
