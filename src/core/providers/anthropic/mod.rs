//! Anthropic Claude Provider
//!
//! Messages API integration.

pub mod client;
pub mod config;
pub mod provider;

pub use config::{ANTHROPIC_API_VERSION, ANTHROPIC_DEFAULTS};
pub use provider::AnthropicProvider;
