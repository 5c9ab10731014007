//! Storage configuration

use super::*;
use crate::core::types::OrganizationRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Tiers and organizations written at startup
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Enable database (if false, use in-memory storage)
    #[serde(default)]
    pub enabled: bool,
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub tiers: Vec<TierSeed>,
    #[serde(default)]
    pub organizations: Vec<OrganizationSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSeed {
    pub name: String,
    /// Absent or 0 means unlimited
    #[serde(default)]
    pub max_ai_requests_per_day: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSeed {
    pub id: String,
    pub subscription_tier: String,
    #[serde(default = "default_subscription_status")]
    pub subscription_status: String,
    #[serde(default)]
    pub subscription_end_date: Option<DateTime<Utc>>,
}

impl OrganizationSeed {
    pub fn to_record(&self) -> OrganizationRecord {
        OrganizationRecord {
            id: self.id.clone(),
            subscription_tier: self.subscription_tier.clone(),
            subscription_status: self.subscription_status.clone(),
            subscription_end_date: self.subscription_end_date,
        }
    }
}
