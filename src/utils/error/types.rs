//! Error types for the gateway

use crate::core::access::AccessError;
use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Malformed request, rejected before any provider is contacted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Organization policy refused the request
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Every eligible provider was throttled by the local rate limiter
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The last provider attempted failed and no fallback remained
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// No registered provider can currently serve the model
    #[error("No provider available: {0}")]
    NoProviderAvailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Non-database storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unauthenticated inbound request
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
