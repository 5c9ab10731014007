//! HTTP route modules

pub mod ai;
pub mod health;

use crate::utils::error::GatewayError;
use actix_web::web;

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    ai::configure_routes(cfg);
}

/// Malformed JSON bodies become validation errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        GatewayError::validation(format!("Invalid request body: {}", err)).into()
    })
}
