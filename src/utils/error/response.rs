//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::access::AccessError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            GatewayError::Access(access) => match access {
                AccessError::OrganizationNotFound { .. } => {
                    (StatusCode::NOT_FOUND, "ORGANIZATION_NOT_FOUND")
                }
                AccessError::SubscriptionExpired { .. } => {
                    (StatusCode::PAYMENT_REQUIRED, "SUBSCRIPTION_EXPIRED")
                }
                AccessError::QuotaExceeded { .. } => {
                    (StatusCode::TOO_MANY_REQUESTS, "DAILY_LIMIT_EXCEEDED")
                }
            },
            GatewayError::RateLimitExceeded(_) => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED")
            }
            GatewayError::Provider(_) => (StatusCode::SERVICE_UNAVAILABLE, "PROVIDER_ERROR"),
            GatewayError::NoProviderAvailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NO_PROVIDER_AVAILABLE")
            }
            GatewayError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            GatewayError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            GatewayError::Database(_) | GatewayError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Storage internals stay out of client responses
        let message = match self {
            GatewayError::Database(_) | GatewayError::Storage(_) => {
                "Storage operation failed".to_string()
            }
            GatewayError::Io(_) | GatewayError::Yaml(_) | GatewayError::Serialization(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
