//! Errors crossing the port boundary.

use thiserror::Error;

/// Failure of a call against the platform REST API or payment gateway.
///
/// Carries machine-readable detail for logging; user-facing Hebrew messages
/// are attached at the application layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the backend.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Missing or rejected credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// Response body did not match the expected contract.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Maps an HTTP status and body to the right variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Http {
                status,
                message: message.into(),
            },
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        ApiError::MalformedResponse(detail.into())
    }
}
