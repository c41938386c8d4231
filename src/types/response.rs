//! Response envelope shared by every client call.

use serde::Deserialize;

use crate::errors::{FullContactError, FullContactResult};

/// Status text used when a call fails before any HTTP exchange.
pub const VALIDATION_FAILED: &str = "Validation Failed";

/// Outcome of one client call.
///
/// `status_code` is 0 when the call never reached the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// HTTP status code of the final attempt.
    pub status_code: u16,
    /// Reason phrase, or [`VALIDATION_FAILED`].
    pub status: String,
    /// Typed payload or the failure.
    pub result: FullContactResult<T>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(status_code: u16, status: impl Into<String>, result: FullContactResult<T>) -> Self {
        Self {
            status_code,
            status: status.into(),
            result,
        }
    }

    pub(crate) fn failed(error: FullContactError) -> Self {
        let status = if error.is_validation() {
            VALIDATION_FAILED.to_string()
        } else {
            error.to_string()
        };
        Self::new(0, status, Err(error))
    }

    /// True when the call produced a payload.
    pub fn is_successful(&self) -> bool {
        self.result.is_ok()
    }

    /// Payload, if the call succeeded.
    pub fn payload(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Error, if the call failed.
    pub fn error(&self) -> Option<&FullContactError> {
        self.result.as_ref().err()
    }

    /// Consumes the envelope, returning the result.
    pub fn into_result(self) -> FullContactResult<T> {
        self.result
    }
}

/// Payload of endpoints that answer with an empty body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EmptyResponse {}
