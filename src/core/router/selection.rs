//! Provider selection logic

use std::collections::HashSet;
use std::sync::Arc;

use super::state::DispatchState;
use crate::core::traits::LLMProvider;

impl DispatchState {
    /// Eligible providers for `model`, least loaded first
    ///
    /// A provider is eligible when it serves the model, its breaker is not
    /// open, and it is not in `excluded`. Load is the request count of the
    /// current rate window. The sort is stable, so ties keep registry order.
    pub fn candidates(
        &self,
        model: &str,
        excluded: &HashSet<String>,
    ) -> Vec<Arc<dyn LLMProvider>> {
        let mut eligible: Vec<(u32, &Arc<dyn LLMProvider>)> = self
            .registry
            .iter()
            .filter(|p| p.supports_model(model))
            .filter(|p| !excluded.contains(p.name()))
            .filter(|p| self.breakers.is_healthy(p.name()))
            .map(|p| (self.limiter.current_requests(p.name()), p))
            .collect();

        eligible.sort_by_key(|(load, _)| *load);
        eligible.into_iter().map(|(_, p)| p.clone()).collect()
    }

    /// Best eligible provider, if any
    pub fn select(&self, model: &str, excluded: &HashSet<String>) -> Option<Arc<dyn LLMProvider>> {
        self.candidates(model, excluded).into_iter().next()
    }
}
