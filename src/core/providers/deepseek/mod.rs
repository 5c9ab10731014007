//! DeepSeek Provider
//!
//! OpenAI-compatible wire format.

pub mod config;
pub mod provider;

pub use config::DEEPSEEK_DEFAULTS;
pub use provider::DeepSeekProvider;
