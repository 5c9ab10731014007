//! Tests for error handling

use super::types::GatewayError;
use crate::core::access::AccessError;
use crate::core::providers::unified_provider::ProviderError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

#[test]
fn test_helpers() {
    assert!(matches!(
        GatewayError::validation("no messages"),
        GatewayError::Validation(msg) if msg == "no messages"
    ));
    assert!(matches!(
        GatewayError::no_provider_available("gpt-9"),
        GatewayError::NoProviderAvailable(_)
    ));
}

#[test]
fn test_access_status_codes() {
    let not_found: GatewayError = AccessError::OrganizationNotFound {
        organization_id: "org".into(),
    }
    .into();
    assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

    let expired: GatewayError = AccessError::SubscriptionExpired {
        organization_id: "org".into(),
        reason: "ended".into(),
    }
    .into();
    assert_eq!(expired.status_code(), StatusCode::PAYMENT_REQUIRED);

    let quota: GatewayError = AccessError::QuotaExceeded {
        organization_id: "org".into(),
        used: 10,
        limit: 10,
    }
    .into();
    assert_eq!(quota.status_code(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn test_dispatch_status_codes() {
    assert_eq!(
        GatewayError::validation("x").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        GatewayError::rate_limit_exceeded("x").status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        GatewayError::from(ProviderError::unavailable("openai", "down")).status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        GatewayError::no_provider_available("x").status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        GatewayError::internal("x").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_client_error_classification() {
    assert!(GatewayError::validation("x").is_client_error());
    assert!(!GatewayError::no_provider_available("x").is_client_error());
}

#[actix_web::test]
async fn test_error_body_shape() {
    let response = GatewayError::validation("messages must not be empty").error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"]["message"],
        "Validation error: messages must not be empty"
    );
}

#[actix_web::test]
async fn test_database_error_is_masked() {
    let err = GatewayError::Database(sea_orm::DbErr::Custom("secret dsn".into()));
    let body = actix_web::body::to_bytes(err.error_response().into_body())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["message"], "Storage operation failed");
}
