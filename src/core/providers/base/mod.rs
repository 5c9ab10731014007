//! Module
//!
//! Contains base components shared by all providers

pub mod config;
pub mod http;
pub mod openai_compat;

pub use config::{BaseConfig, CeilingOverride, VendorDefaults};
pub use http::HttpClient;
pub use openai_compat::OpenAICompatibleProvider;
