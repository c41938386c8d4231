//! Status-driven retry policy.

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Decides whether and how a failed attempt is retried.
///
/// Handlers are stateless: the attempt counter lives in the executor, so one
/// handler can be shared by every in-flight call.
pub trait RetryHandler: Send + Sync {
    /// Returns true if a response with this status should be resent.
    fn should_retry(&self, status_code: u16) -> bool;

    /// Maximum number of resends after the first attempt.
    fn retry_attempts(&self) -> u32;

    /// Delay before each resend, in milliseconds.
    fn retry_delay_millis(&self) -> u64;
}

/// Never retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRetryHandler;

impl RetryHandler for DefaultRetryHandler {
    fn should_retry(&self, _status_code: u16) -> bool {
        false
    }

    fn retry_attempts(&self) -> u32 {
        0
    }

    fn retry_delay_millis(&self) -> u64 {
        0
    }
}

/// Retries a fixed set of status codes with a constant delay.
#[derive(Debug, Clone)]
pub struct StatusRetryHandler {
    statuses: Vec<u16>,
    attempts: u32,
    delay_millis: u64,
}

impl StatusRetryHandler {
    /// Creates a handler retrying `statuses` up to `attempts` times.
    pub fn new(statuses: impl Into<Vec<u16>>, attempts: u32, delay_millis: u64) -> Self {
        Self {
            statuses: statuses.into(),
            attempts,
            delay_millis,
        }
    }

    /// Retries rate-limited (429) responses.
    pub fn rate_limited(attempts: u32, delay_millis: u64) -> Self {
        Self::new(vec![429], attempts, delay_millis)
    }
}

impl RetryHandler for StatusRetryHandler {
    fn should_retry(&self, status_code: u16) -> bool {
        self.statuses.contains(&status_code)
    }

    fn retry_attempts(&self) -> u32 {
        self.attempts
    }

    fn retry_delay_millis(&self) -> u64 {
        self.delay_millis
    }
}

/// Sends a request and resends it while the handler asks for a retry.
///
/// Transport failures carry no status code, so they end the loop at once.
pub struct RetryExecutor {
    transport: Arc<dyn HttpTransport>,
    handler: Arc<dyn RetryHandler>,
}

impl RetryExecutor {
    /// Creates an executor over a transport and retry handler.
    pub fn new(transport: Arc<dyn HttpTransport>, handler: Arc<dyn RetryHandler>) -> Self {
        Self { transport, handler }
    }

    /// Runs the request to a terminal outcome.
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut attempt = 0;

        loop {
            let response = self.transport.send(request.clone()).await?;

            if !self.handler.should_retry(response.status)
                || attempt >= self.handler.retry_attempts()
            {
                return Ok(response);
            }

            attempt += 1;
            let delay_ms = self.handler.retry_delay_millis();

            tracing::info!(
                attempt,
                max_attempts = self.handler.retry_attempts(),
                delay_ms,
                status = response.status,
                "Retrying request"
            );

            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

impl std::fmt::Debug for RetryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryExecutor")
            .field("retry_attempts", &self.handler.retry_attempts())
            .field("retry_delay_millis", &self.handler.retry_delay_millis())
            .finish()
    }
}
