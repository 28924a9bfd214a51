//! Error types for the UltraDNS client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during UltraDNS client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authorization failed.
    #[error("Authorization failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from UltraDNS.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Access token expired and could not be refreshed.
    #[error("Access token expired for '{username}', please re-authorize")]
    TokenExpired { username: String },

    /// Invalid response format from UltraDNS.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Classification of a failure for the paginated-fetch retry policy.
///
/// Modeling this as a tag keeps the retry decision out of call sites and
/// makes the policy testable without a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Server-side failure (HTTP 5xx). The same request may be retried.
    Transient,
    /// Client error, decode failure, or a transport failure with no
    /// response. Retrying will not help.
    Fatal,
}

impl ClientError {
    /// Classify this error for the retry policy.
    ///
    /// Only API errors with a 5xx status are transient; everything else,
    /// including connection-level failures where no response was received,
    /// is fatal.
    pub fn failure_class(&self) -> FailureClass {
        match self {
            Self::ApiError { status, .. } if *status >= 500 => FailureClass::Transient,
            _ => FailureClass::Fatal,
        }
    }

    /// Check if this error indicates an expired or rejected token.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::TokenExpired { .. } | Self::ApiError { status: 401, .. }
        )
    }
}
