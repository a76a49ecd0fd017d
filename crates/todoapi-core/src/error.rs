//! Shared error type across todoapi crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed payload.
    BadRequest,
    /// No record for the requested id.
    NotFound,
    /// Request body over the configured limit.
    PayloadTooLarge,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Payload or configuration rejected; the message is safe to show.
    #[error("{0}")]
    Validation(String),
    /// No record matches the given (raw) id.
    #[error("Todo with ID {0} not found")]
    NotFound(String),
    #[error("payload too large")]
    PayloadTooLarge,
    /// Backing-store or startup fault. The message is for logs only.
    #[error("internal: {0}")]
    Internal(String),
}

impl TodoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TodoError::Validation(_) => ClientCode::BadRequest,
            TodoError::NotFound(_) => ClientCode::NotFound,
            TodoError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            TodoError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message that may be sent to a client. Internal details never leak.
    pub fn public_message(&self) -> String {
        match self {
            TodoError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}
