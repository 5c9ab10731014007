//! Google Gemini Provider
//!
//! `generateContent` integration, registered as `google`.

pub mod client;
pub mod config;
pub mod provider;

pub use config::GEMINI_DEFAULTS;
pub use provider::GeminiProvider;
