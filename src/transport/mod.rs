//! HTTP transport layer for the FullContact client.
//!
//! Provides the transport abstraction the executor sends through and a
//! reqwest-backed implementation that owns the shared connection pool.

mod http;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, HttpTransportImpl};

use std::time::Duration;

use crate::errors::FullContactError;

/// Transport error types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// Invalid response.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}

impl From<TransportError> for FullContactError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connection { message } => FullContactError::Network { message },
            TransportError::Timeout { timeout } => FullContactError::Timeout { timeout },
            TransportError::InvalidResponse { message } => FullContactError::Transport { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_mapping() {
        let err: FullContactError = TransportError::Connection {
            message: "refused".to_string(),
        }
        .into();
        assert!(matches!(err, FullContactError::Network { .. }));

        let err: FullContactError = TransportError::Timeout {
            timeout: Duration::from_millis(3000),
        }
        .into();
        assert_eq!(
            err,
            FullContactError::Timeout {
                timeout: Duration::from_millis(3000)
            }
        );
    }
}
