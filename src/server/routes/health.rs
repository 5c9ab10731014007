//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    #[serde(flatten)]
    health: crate::core::HealthStatus,
    version: &'static str,
    build: crate::BuildInfo,
}

/// Liveness plus storage and breaker health; never calls a vendor
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let health = state.gateway.health_check().await;
    let mut response = if health.status == "unhealthy" {
        HttpResponse::ServiceUnavailable()
    } else {
        HttpResponse::Ok()
    };

    response.json(HealthResponse {
        health,
        version: crate::VERSION,
        build: crate::build_info(),
    })
}
