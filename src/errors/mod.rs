//! Error types for the FullContact client.
//!
//! Every failure the client can report, from builder validation through
//! transport and remote API errors, is a [`FullContactError`]. All variants
//! render with a `FullContactError: ` prefix so messages stay stable for
//! callers that match on text.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for FullContact operations.
pub type FullContactResult<T> = Result<T, FullContactError>;

/// Error type for FullContact client operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FullContactError {
    /// Invalid client configuration or credentials.
    #[error("FullContactError: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// A request failed builder or business validation.
    #[error("FullContactError: {message}")]
    Validation {
        /// Error message naming the violated rule.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("FullContactError: HTTP {status_code}: {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Response body or reason text.
        message: String,
    },

    /// Connection-level failure.
    #[error("FullContactError: Network error: {message}")]
    Network {
        /// Error message.
        message: String,
    },

    /// A single attempt exceeded the configured timeout.
    #[error("FullContactError: Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The transport produced an unusable response.
    #[error("FullContactError: Transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[error("FullContactError: Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },

    /// Local filesystem failure.
    #[error("FullContactError: IO error: {message}")]
    Io {
        /// Error message.
        message: String,
    },

    /// The task owning a call ended without delivering a response.
    #[error("FullContactError: response channel closed before a result was delivered")]
    Channel,
}

impl FullContactError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FullContactError::Validation {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        FullContactError::Configuration {
            message: message.into(),
        }
    }

    /// Creates an API error from a status code and body text.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        FullContactError::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FullContactError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns true for errors raised before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(self, FullContactError::Validation { .. })
    }
}

impl From<serde_json::Error> for FullContactError {
    fn from(err: serde_json::Error) -> Self {
        FullContactError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for FullContactError {
    fn from(err: url::ParseError) -> Self {
        FullContactError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<std::io::Error> for FullContactError {
    fn from(err: std::io::Error) -> Self {
        FullContactError::Io {
            message: err.to_string(),
        }
    }
}
