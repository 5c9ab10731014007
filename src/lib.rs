//! # llm-dispatch
//!
//! AI request dispatch gateway. Each chat request is checked against the
//! organization's subscription and daily quota, then routed to the least
//! loaded healthy provider serving the requested model, falling back across
//! providers until one succeeds. Per-provider fixed-window rate limits and
//! circuit breakers keep traffic away from throttled or failing vendors.
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use llm_dispatch::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     HttpServer::new(&config).await?.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library Mode
//!
//! ```rust,no_run
//! use llm_dispatch::{ChatMessage, ChatRequest, Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = Gateway::new(Config::from_env()?).await?;
//!     let request = ChatRequest::new(
//!         "gpt-4o",
//!         vec![ChatMessage::user("Hello")],
//!         "user-1",
//!         "org-1",
//!     );
//!     let response = gateway.dispatcher().dispatch(&request).await?;
//!     println!("{} answered: {}", response.provider, response.content);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::Gateway;
pub use core::providers::{ProviderError, ProviderRegistry, ProviderType};
pub use core::router::Dispatcher;
pub use core::traits::LLMProvider;
pub use core::types::{ChatMessage, ChatRequest, ChatResponse, FinishReason, MessageRole, Usage};
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
