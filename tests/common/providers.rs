//! Mock vendor endpoints
//!
//! Each [`VendorMock`] owns a wiremock server that speaks one vendor wire
//! format, so the real adapters run unchanged against it.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

use super::fixtures::SHARED_MODEL;

pub struct VendorMock {
    server: MockServer,
}

impl VendorMock {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Number of requests the server has seen so far
    pub async fn received(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    /// OpenAI-compatible `/chat/completions` reply
    pub async fn openai_reply(&self, content: &str, times: impl Into<Times>) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-test",
                "model": SHARED_MODEL,
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
            })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// OpenAI-compatible reply held back for `delay`
    pub async fn openai_slow_reply(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "chatcmpl-late", "choices": []}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Anthropic `/v1/messages` reply
    pub async fn anthropic_reply(&self, content: &str, times: impl Into<Times>) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_test",
                "type": "message",
                "model": SHARED_MODEL,
                "content": [{"type": "text", "text": content}],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 12, "output_tokens": 3}
            })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Gemini `generateContent` reply
    pub async fn gemini_reply(&self, content: &str, times: impl Into<Times>) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/v1beta/models/{}:generateContent",
                SHARED_MODEL
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": content}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {
                    "promptTokenCount": 12,
                    "candidatesTokenCount": 3,
                    "totalTokenCount": 15
                }
            })))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// OpenAI-compatible `GET /models`, answered by liveness checks
    pub async fn models_listing(&self) {
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&self.server)
            .await;
    }

    /// Any POST answered with `status`
    pub async fn fail_with(&self, status: u16, times: impl Into<Times>) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
            .expect(times)
            .mount(&self.server)
            .await;
    }
}
