//! Unified Provider Error Handling
//!
//! Single error type shared by every provider adapter.
//!
//! | Variant | Upstream signal | Counts against breaker |
//! |------|------|--------|
//! | RateLimited | HTTP 429 | Yes |
//! | Unauthorized | HTTP 401 | Yes |
//! | Forbidden | HTTP 403 | Yes |
//! | Unavailable | any other status, transport failure, timeout, bad body | Yes |
//! | InvalidRequest | rejected locally before any network call | No |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use llm_dispatch::ProviderError;
//!
//! let err = ProviderError::from_status("openai", 429, "slow down");
//! assert_eq!(err.kind(), ProviderErrorKind::RateLimited);
//! ```

use std::fmt;

/// Unified provider error type - single error for all providers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimited { provider: String, message: String },

    #[error("Authentication failed for {provider}: {message}")]
    Unauthorized { provider: String, message: String },

    #[error("Access forbidden for {provider}: {message}")]
    Forbidden { provider: String, message: String },

    #[error("Provider {provider} is unavailable: {message}")]
    Unavailable { provider: String, message: String },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest { provider: String, message: String },
}

/// Classification of a [`ProviderError`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    RateLimited,
    Unauthorized,
    Forbidden,
    Unavailable,
    InvalidRequest,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderErrorKind::RateLimited => "rate_limited",
            ProviderErrorKind::Unauthorized => "unauthorized",
            ProviderErrorKind::Forbidden => "forbidden",
            ProviderErrorKind::Unavailable => "unavailable",
            ProviderErrorKind::InvalidRequest => "invalid_request",
        };
        f.write_str(name)
    }
}

impl ProviderError {
    /// Create rate limited error
    pub fn rate_limited(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RateLimited {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create unauthorized error
    pub fn unauthorized(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create forbidden error
    pub fn forbidden(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Forbidden {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create unavailable error
    pub fn unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP status from the vendor
    pub fn from_status(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let provider = provider.into();
        let body = body.into();
        match status {
            429 => Self::rate_limited(provider, body),
            401 => Self::unauthorized(provider, body),
            403 => Self::forbidden(provider, body),
            _ => Self::unavailable(provider, format!("HTTP {}: {}", status, body)),
        }
    }

    /// Map a transport-level failure from the HTTP client
    pub fn from_transport(provider: impl Into<String>, err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("Request timeout: {}", err)
        } else if err.is_connect() {
            format!("Connection failed: {}", err)
        } else if err.is_decode() {
            format!("Failed to decode response: {}", err)
        } else {
            err.to_string()
        };
        Self::unavailable(provider, message)
    }

    /// Provider that raised the error
    pub fn provider(&self) -> &str {
        match self {
            Self::RateLimited { provider, .. }
            | Self::Unauthorized { provider, .. }
            | Self::Forbidden { provider, .. }
            | Self::Unavailable { provider, .. }
            | Self::InvalidRequest { provider, .. } => provider,
        }
    }

    /// Human-readable detail
    pub fn message(&self) -> &str {
        match self {
            Self::RateLimited { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::Unavailable { message, .. }
            | Self::InvalidRequest { message, .. } => message,
        }
    }

    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::RateLimited { .. } => ProviderErrorKind::RateLimited,
            Self::Unauthorized { .. } => ProviderErrorKind::Unauthorized,
            Self::Forbidden { .. } => ProviderErrorKind::Forbidden,
            Self::Unavailable { .. } => ProviderErrorKind::Unavailable,
            Self::InvalidRequest { .. } => ProviderErrorKind::InvalidRequest,
        }
    }

    /// Whether this failure is the upstream's fault and should trip the breaker
    pub fn counts_as_failure(&self) -> bool {
        !matches!(self, Self::InvalidRequest { .. })
    }
}
