//! Mock implementations for testing.
//!
//! Provides a scripted transport and a configurable retry handler so the
//! client can be exercised without a network.

use async_trait::async_trait;
use http::HeaderMap;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::resilience::RetryHandler;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request path.
    pub path: String,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Request headers.
    pub headers: HeaderMap,
}

impl RecordedRequest {
    /// Parses the body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a JSON response from a serializable value.
    pub fn json<T: serde::Serialize>(status: u16, value: &T) -> Self {
        Self::json_str(status, &serde_json::to_string(value).unwrap_or_default())
    }

    /// Creates a JSON response from raw text.
    pub fn json_str(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    /// Creates a response with no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Creates a response with a raw binary body.
    pub fn bytes(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

type Scripted = Result<MockResponse, TransportError>;

/// Mock HTTP transport for testing.
///
/// Queued outcomes are served first-in first-out; once the queue is empty
/// the default response is served, or a 500 if none is set.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_response: Mutex<Option<MockResponse>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        lock(&self.responses).push_back(Ok(response));
    }

    /// Queues a transport failure.
    pub fn queue_transport_error(&self, error: TransportError) {
        lock(&self.responses).push_back(Err(error));
    }

    /// Sets the response served once the queue is drained.
    pub fn set_default(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn next_outcome(&self) -> Scripted {
        if let Some(outcome) = lock(&self.responses).pop_front() {
            return outcome;
        }
        Ok(lock(&self.default_response)
            .clone()
            .unwrap_or_else(|| MockResponse::json_str(500, "No mock response configured")))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            method: request.method,
            path: request.path,
            body: request.body,
            headers: request.headers,
        });

        let response = self.next_outcome()?;
        Ok(HttpResponse {
            status: response.status,
            body: response.body,
        })
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}

/// Retry handler with fixed answers, for exercising the executor.
#[derive(Debug, Clone, Copy)]
pub struct MockRetryHandler {
    /// Answer for every status.
    pub retry: bool,
    /// Attempts after the first send.
    pub attempts: u32,
    /// Delay between attempts, in milliseconds.
    pub delay_millis: u64,
}

impl MockRetryHandler {
    /// Retries every status `attempts` times without delay.
    pub fn always(attempts: u32) -> Self {
        Self {
            retry: true,
            attempts,
            delay_millis: 0,
        }
    }
}

impl RetryHandler for MockRetryHandler {
    fn should_retry(&self, _status_code: u16) -> bool {
        self.retry
    }

    fn retry_attempts(&self) -> u32 {
        self.attempts
    }

    fn retry_delay_millis(&self) -> u64 {
        self.delay_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_queue_order() {
        let transport = MockTransport::new();
        transport.queue(MockResponse::json_str(200, r#"{"first":true}"#));
        transport.queue(MockResponse::empty(204));

        let first = transport.send(HttpRequest::get("a")).await.unwrap();
        let second = transport.send(HttpRequest::get("b")).await.unwrap();
        let third = transport.send(HttpRequest::get("c")).await.unwrap();

        assert_eq!(first.status, 200);
        assert!(first.text().contains("first"));
        assert_eq!(second.status, 204);
        assert_eq!(third.status, 500);
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockTransport::new();
        transport.set_default(MockResponse::json_str(200, "{}"));

        transport
            .send(HttpRequest::post("identity.map").with_body(br#"{"recordId":"r1"}"#.to_vec()))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "identity.map");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.json_body().unwrap()["recordId"], "r1");
    }

    #[tokio::test]
    async fn test_mock_transport_error() {
        let transport = MockTransport::new();
        transport.queue_transport_error(TransportError::InvalidResponse {
            message: "truncated".to_string(),
        });

        let result = transport.send(HttpRequest::get("x")).await;
        assert!(matches!(result, Err(TransportError::InvalidResponse { .. })));
        assert_eq!(transport.request_count(), 1);
    }
}
