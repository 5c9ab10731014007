//! Dispatch context shared by every in-flight request

use crate::core::circuit_breaker::CircuitBreakers;
use crate::core::providers::ProviderRegistry;
use crate::core::rate_limiter::RateLimiter;

/// Registry plus the mutable per-provider health and load state
///
/// Built once at startup; rate windows and breakers start empty, so every
/// provider is healthy and idle on a cold start.
#[derive(Debug, Default)]
pub struct DispatchState {
    pub registry: ProviderRegistry,
    pub limiter: RateLimiter,
    pub breakers: CircuitBreakers,
}

impl DispatchState {
    pub fn new(registry: ProviderRegistry, limiter: RateLimiter, breakers: CircuitBreakers) -> Self {
        Self {
            registry,
            limiter,
            breakers,
        }
    }

    /// State with default window and breaker settings
    pub fn with_registry(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }
}
