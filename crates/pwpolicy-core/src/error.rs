//! Shared error type across pwPolicy crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Realm or policy kind does not exist.
    NotFound,
    /// Unsupported config or payload version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by core and console.
///
/// The codec itself never produces one of these; they come from the editor,
/// the config loader, and the realm store.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PolicyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PolicyError::BadRequest(_) => ClientCode::BadRequest,
            PolicyError::NotFound(_) => ClientCode::NotFound,
            PolicyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PolicyError::Internal(_) => ClientCode::Internal,
        }
    }
}
