//! Shared error type across frontend crates.

use thiserror::Error;

/// Stable error codes surfaced in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FrontendError>;

/// Unified error type used by core and server.
///
/// The simulated 500 on `/` is response data and never travels through this type.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FrontendError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            FrontendError::BadRequest(_) => ErrorCode::BadRequest,
            FrontendError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            FrontendError::Internal(_) => ErrorCode::Internal,
        }
    }
}
