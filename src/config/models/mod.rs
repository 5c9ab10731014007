//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod gateway;
pub mod logging;
pub mod provider;
pub mod resilience;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use gateway::*;
pub use logging::*;
pub use provider::*;
pub use resilience::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default provider request deadline in seconds
pub fn default_timeout() -> u64 {
    60
}

pub fn default_true() -> bool {
    true
}

pub fn default_failure_threshold() -> u32 {
    5
}

pub fn default_cooldown_secs() -> u64 {
    60
}

pub fn default_window_secs() -> u64 {
    60
}

pub fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_subscription_status() -> String {
    crate::core::types::organization::ACTIVE_STATUS.to_string()
}
