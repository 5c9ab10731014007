//! Logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Log output settings; `RUST_LOG` overrides `level` when set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit one JSON object per event instead of human-readable lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
