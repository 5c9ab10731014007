//! AI chat endpoints

use crate::core::types::{ChatMessage, ChatRequest};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Header carrying the user id established by the upstream auth layer
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Configure AI API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/ai/chat")
            .route(web::post().to(chat))
            .route(web::get().to(chat_info)),
    );
}

/// Body of `POST /api/ai/chat`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    pub organization_id: String,
}

impl ChatPayload {
    fn into_request(self, user_id: String) -> ChatRequest {
        ChatRequest {
            model: self.model,
            messages: self.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            user_id,
            organization_id: self.organization_id,
        }
    }
}

/// Body of `GET /api/ai/chat`
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatInfo {
    pub models: BTreeMap<String, Vec<String>>,
    pub providers: BTreeMap<String, bool>,
}

fn user_id(req: &HttpRequest) -> Result<String, GatewayError> {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GatewayError::unauthorized("Authentication required"))
}

/// Dispatch one chat request
pub async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<ChatPayload>,
) -> Result<HttpResponse, GatewayError> {
    let user_id = user_id(&req)?;
    let request = payload.into_inner().into_request(user_id);
    debug!(model = %request.model, "chat request received");

    match state.dispatcher().dispatch(&request).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            warn!(model = %request.model, error = %e, "chat request failed");
            Err(e)
        }
    }
}

/// Available models and provider status
pub async fn chat_info(state: web::Data<AppState>) -> HttpResponse {
    let dispatcher = state.dispatcher();
    HttpResponse::Ok().json(ChatInfo {
        models: dispatcher.list_available_models(),
        providers: dispatcher.provider_status().await,
    })
}
