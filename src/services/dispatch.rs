//! Request dispatch: one spawned task per call, delivering through a oneshot.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use super::ResponseHandle;
use crate::config::FullContactConfig;
use crate::errors::{FullContactError, FullContactResult};
use crate::observability::redact;
use crate::resilience::RetryExecutor;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::response::ApiResponse;

/// Turns a 2xx body into a payload.
pub(crate) type BodyParser<T> = fn(Bytes) -> FullContactResult<T>;

/// Parses a JSON body; an empty body reads as `{}`.
pub(crate) fn parse_json<T: DeserializeOwned>(body: Bytes) -> FullContactResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"{}")?);
    }
    Ok(serde_json::from_slice(&body)?)
}

/// `"<code> <reason>"`, matching the status line.
fn status_text(status: u16) -> String {
    match http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("{} {}", status, reason),
        None => status.to_string(),
    }
}

fn into_api_response<T>(response: HttpResponse, parse: BodyParser<T>) -> ApiResponse<T> {
    let status = status_text(response.status);
    if response.is_success() {
        let result = parse(Bytes::from(response.body));
        if let Err(err) = &result {
            tracing::warn!(status = response.status, error = %err, "Failed to parse response body");
        }
        return ApiResponse::new(response.status, status, result);
    }

    let message = match response.text() {
        text if text.trim().is_empty() => status.clone(),
        text => text,
    };
    tracing::warn!(
        status = response.status,
        body = %redact(&message),
        "Request failed"
    );
    ApiResponse::new(
        response.status,
        status,
        Err(FullContactError::api(response.status, message)),
    )
}

/// Sends requests on the captured runtime and hands back completion handles.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    config: Arc<FullContactConfig>,
    executor: Arc<RetryExecutor>,
    runtime: Handle,
}

impl Dispatcher {
    pub(crate) fn new(
        config: Arc<FullContactConfig>,
        transport: Arc<dyn HttpTransport>,
        runtime: Handle,
    ) -> Self {
        let executor = Arc::new(RetryExecutor::new(
            transport,
            Arc::clone(config.retry_handler()),
        ));
        Self {
            config,
            executor,
            runtime,
        }
    }

    /// POSTs `body` as JSON and parses a JSON payload.
    pub(crate) fn post_json<B, T>(&self, path: &str, body: &B) -> ResponseHandle<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        match serde_json::to_vec(body) {
            Ok(bytes) => self.send(HttpRequest::post(path).with_body(bytes), parse_json::<T>),
            Err(err) => ResponseHandle::ready(ApiResponse::failed(err.into())),
        }
    }

    /// GETs `path` and parses the body with `parse`.
    pub(crate) fn get<T>(&self, path: String, parse: BodyParser<T>) -> ResponseHandle<T>
    where
        T: Send + 'static,
    {
        self.send(HttpRequest::get(path), parse)
    }

    fn send<T>(&self, request: HttpRequest, parse: BodyParser<T>) -> ResponseHandle<T>
    where
        T: Send + 'static,
    {
        let request = request.with_headers(self.config.request_headers());
        tracing::debug!(
            method = ?request.method,
            path = %request.path,
            headers = %redact(&format!("{:?}", request.headers)),
            "Dispatching request"
        );

        let (tx, rx) = oneshot::channel();
        let executor = Arc::clone(&self.executor);
        self.runtime.spawn(async move {
            let response = match executor.execute(request).await {
                Ok(response) => into_api_response(response, parse),
                Err(err) => {
                    tracing::warn!(error = %err, "Transport failure");
                    ApiResponse::failed(err.into())
                }
            };
            // The caller may have dropped the handle.
            let _ = tx.send(response);
        });
        ResponseHandle::pending(rx)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("executor", &self.executor)
            .finish()
    }
}
