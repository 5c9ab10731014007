//! Core LLM Provider trait definitions
//!
//! Defines unified interface for all AI providers

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{ChatRequest, ChatResponse, RateLimitCeiling};

/// Unified LLM Provider interface
///
/// Every vendor adapter implements this trait and is registered into the
/// [`ProviderRegistry`](crate::core::providers::ProviderRegistry) under its
/// [`name`](LLMProvider::name).
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
///
/// #[async_trait]
/// impl LLMProvider for MyProvider {
///     fn name(&self) -> &str {
///         "my_provider"
///     }
///
///     // implement other required methods...
/// }
/// ```
#[async_trait]
pub trait LLMProvider: Send + Sync + Debug {
    /// Registry name, unique across the process
    fn name(&self) -> &str;

    /// Models this provider can serve
    fn models(&self) -> &[String];

    /// Check if model is supported
    fn supports_model(&self, model: &str) -> bool {
        self.models().iter().any(|m| m == model)
    }

    /// Static request and token ceilings for this provider
    fn rate_limit(&self) -> RateLimitCeiling;

    /// Execute a chat completion
    ///
    /// Fails fast with [`ProviderError::InvalidRequest`] when the model is
    /// empty or unsupported or there are no messages. Upstream failures are
    /// classified by HTTP status.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError>;

    /// Best-effort liveness check. Never errors.
    async fn is_available(&self) -> bool;
}

/// Shared validation run by adapters before touching the network
pub fn validate_request(
    provider: &dyn LLMProvider,
    request: &ChatRequest,
) -> Result<(), ProviderError> {
    if request.model.trim().is_empty() {
        return Err(ProviderError::invalid_request(
            provider.name(),
            "Model is required",
        ));
    }
    if request.messages.is_empty() {
        return Err(ProviderError::invalid_request(
            provider.name(),
            "At least one message is required",
        ));
    }
    if !provider.supports_model(&request.model) {
        return Err(ProviderError::invalid_request(
            provider.name(),
            format!("Model {} is not supported", request.model),
        ));
    }
    Ok(())
}
