//! Mistral AI Provider
//!
//! Mistral exposes an OpenAI-compatible chat completions endpoint.

pub mod config;
pub mod provider;

pub use config::MISTRAL_DEFAULTS;
pub use provider::MistralProvider;
