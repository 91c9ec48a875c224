//! Quote-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuoteId, ValidationError};

/// Quote-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Quote was not found.
    NotFound(QuoteId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Document rendering failed.
    RenderFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl QuoteError {
    pub fn not_found(id: QuoteId) -> Self {
        QuoteError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuoteError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::NotFound(_) => ErrorCode::QuoteNotFound,
            QuoteError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuoteError::RenderFailed(_) => ErrorCode::RenderFailed,
            QuoteError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            QuoteError::NotFound(id) => format!("Quote not found: {}", id),
            QuoteError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            QuoteError::RenderFailed(msg) => format!("Could not render quote: {}", msg),
            QuoteError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for QuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuoteError {}

impl From<ValidationError> for QuoteError {
    fn from(err: ValidationError) -> Self {
        QuoteError::validation(err.field(), err.to_string())
    }
}

impl From<DomainError> for QuoteError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::RenderFailed => QuoteError::RenderFailed(err.message),
            ErrorCode::ValidationFailed => QuoteError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => QuoteError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failure_keeps_its_code() {
        let err: QuoteError = DomainError::new(ErrorCode::RenderFailed, "template").into();
        assert_eq!(err.code(), ErrorCode::RenderFailed);
    }

    #[test]
    fn validation_error_maps_field() {
        let err: QuoteError = ValidationError::empty_field("email").into();
        assert!(matches!(err, QuoteError::ValidationFailed { ref field, .. } if field == "email"));
    }
}
