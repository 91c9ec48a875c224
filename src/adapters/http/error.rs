//! Shared HTTP error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Pairs the body with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// 400 for a path segment that is not a valid ID.
pub fn invalid_id(resource_type: &str) -> Response {
    ErrorResponse::bad_request(format!("Invalid {} ID", resource_type))
        .with_status(StatusCode::BAD_REQUEST)
}

/// Maps a port-level error onto a status code.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::VendorNotFound | ErrorCode::QuoteNotFound | ErrorCode::WizardNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::TravelCatalogError => StatusCode::BAD_GATEWAY,
        ErrorCode::RenderFailed | ErrorCode::DatabaseError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    }

    let details = if error.details.is_empty() {
        None
    } else {
        serde_json::to_value(&error.details).ok()
    };
    ErrorResponse {
        code: error.code.to_string(),
        message: error.message,
        details,
    }
    .with_status(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_response_names_field() {
        let error = ErrorResponse::validation("name", "Field 'name' cannot be empty");
        assert_eq!(error.code, "VALIDATION_FAILED");
        assert_eq!(error.details.unwrap()["field"], "name");
    }

    #[test]
    fn domain_errors_map_to_status() {
        let response = domain_error_response(DomainError::new(ErrorCode::ValidationFailed, "bad"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = domain_error_response(DomainError::new(ErrorCode::QuoteNotFound, "gone"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = domain_error_response(DomainError::new(ErrorCode::DatabaseError, "down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
