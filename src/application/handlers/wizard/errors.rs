//! Wizard-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, WizardId};

/// Wizard session errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardError {
    /// No live session with this ID.
    NotFound(WizardId),
    /// A submitted change was rejected.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl WizardError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WizardError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NotFound(_) => ErrorCode::WizardNotFound,
            WizardError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WizardError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            WizardError::NotFound(id) => format!("Wizard session not found: {}", id),
            WizardError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            WizardError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WizardError {}

impl From<DomainError> for WizardError {
    fn from(err: DomainError) -> Self {
        WizardError::Infrastructure(err.to_string())
    }
}
