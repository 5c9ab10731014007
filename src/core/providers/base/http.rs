//! HTTP plumbing shared by provider adapters

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tokio::time::timeout;

use crate::core::providers::unified_provider::ProviderError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const KEEPALIVE_SECS: u64 = 90;

/// reqwest client bound to one provider's name and deadline
#[derive(Debug, Clone)]
pub struct HttpClient {
    provider: String,
    client: Client,
    deadline: Duration,
}

impl HttpClient {
    pub fn new(provider: impl Into<String>, deadline: Duration) -> Result<Self, ProviderError> {
        let provider = provider.into();
        let client = Client::builder()
            .timeout(deadline)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(KEEPALIVE_SECS))
            .build()
            .map_err(|e| {
                ProviderError::unavailable(&provider, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            provider,
            client,
            deadline,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// POST a JSON body and decode a JSON response
    pub async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: &Value,
    ) -> Result<Value, ProviderError> {
        let mut request = self.client.post(url).json(body);
        for (key, value) in headers {
            request = request.header(*key, value);
        }
        let response = self.send(request).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::unavailable(&self.provider, format!("Invalid response body: {}", e)))
    }

    /// GET and only check for a success status
    pub async fn ping(&self, url: &str, headers: &[(&str, String)]) -> Result<(), ProviderError> {
        let mut request = self.client.get(url);
        for (key, value) in headers {
            request = request.header(*key, value);
        }
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ProviderError> {
        let response = timeout(self.deadline, request.send())
            .await
            .map_err(|_| ProviderError::unavailable(&self.provider, "Request timeout"))?
            .map_err(|e| ProviderError::from_transport(&self.provider, &e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::debug!(provider = %self.provider, status = status.as_u16(), "upstream returned error status");
        Err(ProviderError::from_status(&self.provider, status.as_u16(), body))
    }
}
