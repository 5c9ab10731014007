//! Dispatch orchestration
//!
//! Access check, then an explicit loop over a shrinking candidate set: each
//! attempt excludes the provider it tried, so no provider is called twice
//! for one request.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, instrument};

use super::state::DispatchState;
use crate::core::access::AccessPolicy;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ChatHistoryStore;
use crate::core::types::{ChatHistoryEntry, ChatRequest, ChatResponse, DispatchStatus};
use crate::utils::error::{GatewayError, Result};

/// Entry point for chat requests
#[derive(Clone)]
pub struct Dispatcher {
    state: Arc<DispatchState>,
    access: AccessPolicy,
    history: Arc<dyn ChatHistoryStore>,
}

impl Dispatcher {
    pub fn new(
        state: Arc<DispatchState>,
        access: AccessPolicy,
        history: Arc<dyn ChatHistoryStore>,
    ) -> Self {
        Self {
            state,
            access,
            history,
        }
    }

    pub fn state(&self) -> &Arc<DispatchState> {
        &self.state
    }

    /// Run one chat request to a single outcome
    #[instrument(
        name = "dispatch",
        skip_all,
        fields(model = %request.model, organization_id = %request.organization_id)
    )]
    pub async fn dispatch(&self, request: &ChatRequest) -> Result<ChatResponse> {
        validate(request)?;

        self.access
            .check_access(&request.user_id, &request.organization_id)
            .await?;

        let mut excluded: HashSet<String> = HashSet::new();
        let mut last_error: Option<ProviderError> = None;
        let mut throttled = 0usize;

        while let Some(provider) = self.state.select(&request.model, &excluded) {
            let name = provider.name().to_string();
            excluded.insert(name.clone());

            if !self.state.limiter.admit(&name, &provider.rate_limit()) {
                debug!(provider = %name, "provider throttled, trying next candidate");
                throttled += 1;
                continue;
            }

            let attempt = excluded.len();
            match provider.chat(request).await {
                Ok(response) => {
                    self.state
                        .limiter
                        .record(&name, response.usage.total_tokens);
                    self.state.breakers.record_success(&name);
                    debug!(provider = %name, attempt, "dispatch succeeded");

                    self.log_success(request, &response).await;
                    return Ok(response);
                }
                Err(err) if !err.counts_as_failure() => {
                    self.log_failure(request, &err.to_string()).await;
                    return Err(err.into());
                }
                Err(err) => {
                    self.state.breakers.record_failure(&name);
                    info!(
                        provider = %name,
                        attempt,
                        error = %err,
                        "provider failed, falling back"
                    );
                    last_error = Some(err);
                }
            }
        }

        let outcome = match last_error {
            Some(err) => GatewayError::Provider(err),
            None if throttled > 0 => GatewayError::rate_limit_exceeded(format!(
                "all {} eligible providers for {} are throttled",
                throttled, request.model
            )),
            None => {
                return Err(GatewayError::no_provider_available(format!(
                    "No provider available for model: {}",
                    request.model
                )));
            }
        };

        self.log_failure(request, &outcome.to_string()).await;
        Err(outcome)
    }

    /// Models of every healthy provider, keyed by provider name
    pub fn list_available_models(&self) -> BTreeMap<String, Vec<String>> {
        self.state
            .registry
            .iter()
            .filter(|p| self.state.breakers.is_healthy(p.name()))
            .map(|p| (p.name().to_string(), p.models().to_vec()))
            .collect()
    }

    /// Liveness and breaker health of every provider
    pub async fn provider_status(&self) -> BTreeMap<String, bool> {
        let checks = self.state.registry.iter().map(|provider| {
            let provider = provider.clone();
            async move {
                let healthy = self.state.breakers.is_healthy(provider.name());
                let alive = provider.is_available().await;
                (provider.name().to_string(), alive && healthy)
            }
        });
        join_all(checks).await.into_iter().collect()
    }

    async fn log_success(&self, request: &ChatRequest, response: &ChatResponse) {
        let user =
            ChatHistoryEntry::user_turn(request, Some(response), DispatchStatus::Success, None);
        if self.append(user).await {
            self.append(ChatHistoryEntry::assistant_turn(request, response))
                .await;
        }
    }

    async fn log_failure(&self, request: &ChatRequest, message: &str) {
        let entry = ChatHistoryEntry::user_turn(
            request,
            None,
            DispatchStatus::Failed,
            Some(message.to_string()),
        );
        self.append(entry).await;
    }

    /// History failures never reach the caller
    async fn append(&self, entry: ChatHistoryEntry) -> bool {
        match self.history.append(entry).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to log chat request");
                false
            }
        }
    }
}

fn validate(request: &ChatRequest) -> Result<()> {
    if request.model.trim().is_empty() {
        return Err(GatewayError::validation("Model is required"));
    }
    if request.messages.is_empty() {
        return Err(GatewayError::validation("Messages are required"));
    }
    Ok(())
}
