//! Validation errors for value object construction.

use thiserror::Error;

/// Rejections raised while constructing or transitioning value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    pub fn invalid_format(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }
}
