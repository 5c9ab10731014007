//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn rate_limit_exceeded<S: Into<String>>(message: S) -> Self {
        Self::RateLimitExceeded(message.into())
    }

    pub fn no_provider_available<S: Into<String>>(message: S) -> Self {
        Self::NoProviderAvailable(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the failure originates from the caller rather than the gateway
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GatewayError::Validation(_)
                | GatewayError::Access(_)
                | GatewayError::Unauthorized(_)
        )
    }
}
