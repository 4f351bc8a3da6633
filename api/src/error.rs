//! Unified error types for the AGS API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `EventError`: Domain event publishing errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Validation(String),

    /// A named business rule was violated (e.g. removing a required component)
    #[error("{message}")]
    BusinessRule { rule: &'static str, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn business_rule(rule: &'static str, message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            rule,
            message: message.into(),
        }
    }
}

/// Domain event publishing errors
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Failed to publish event: {0}")]
    Publish(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, rule) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()), None)
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => (
                StatusCode::CONFLICT,
                "Already exists",
                Some(msg.clone()),
                None,
            ),
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
                None,
            ),
            AppError::Domain(DomainError::BusinessRule { rule, message }) => (
                StatusCode::CONFLICT,
                "Business rule violation",
                Some(message.clone()),
                Some(rule.to_string()),
            ),
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()), None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            rule,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::Domain(DomainError::NotFound("Item with code 'X' not found".into()));
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::NotFound("missing".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Domain(DomainError::validation("Item name cannot be empty"));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicates_and_rules_map_to_409() {
        let dup = AppError::Domain(DomainError::AlreadyExists("dup".into()));
        assert_eq!(status_of(dup), StatusCode::CONFLICT);

        let rule = AppError::Domain(DomainError::business_rule(
            "component.required",
            "Cannot remove required component",
        ));
        assert_eq!(status_of(rule), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn internal_maps_to_500_without_details() {
        let response = AppError::Domain(DomainError::Internal("lock poisoned".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("message").is_none());
        assert!(!String::from_utf8_lossy(&bytes).contains("lock poisoned"));
    }

    #[test]
    fn domain_error_message_is_passed_through() {
        let err = DomainError::business_rule("duplicate.item.code", "Item with code 'A' already exists");
        assert_eq!(err.to_string(), "Item with code 'A' already exists");
    }
}
