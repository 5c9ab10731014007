//! OpenAI Provider
//!
//! Chat completions against `api.openai.com`.

pub mod config;
pub mod provider;

pub use config::OPENAI_DEFAULTS;
pub use provider::OpenAIProvider;
