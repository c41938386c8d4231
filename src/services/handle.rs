//! Single-value completion handle returned by every client call.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::errors::FullContactError;
use crate::types::response::ApiResponse;

enum State<T> {
    Ready(Option<ApiResponse<T>>),
    Pending(oneshot::Receiver<ApiResponse<T>>),
}

/// Completes exactly once with the outcome of one API call.
///
/// Await it from async code or call [`ResponseHandle::blocking_wait`] from
/// a thread outside the runtime. Dropping the handle does not cancel the
/// request; its result is discarded.
pub struct ResponseHandle<T> {
    state: State<T>,
}

// The payload is only moved out, never pinned.
impl<T> Unpin for ResponseHandle<T> {}

impl<T> ResponseHandle<T> {
    pub(crate) fn pending(receiver: oneshot::Receiver<ApiResponse<T>>) -> Self {
        Self {
            state: State::Pending(receiver),
        }
    }

    /// A handle that is already complete.
    pub fn ready(response: ApiResponse<T>) -> Self {
        Self {
            state: State::Ready(Some(response)),
        }
    }

    /// True if the response is available without waiting.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(Some(_)))
    }

    /// Blocks the current thread until the response arrives.
    ///
    /// # Panics
    ///
    /// Panics when called from within an async execution context.
    pub fn blocking_wait(self) -> ApiResponse<T> {
        match self.state {
            State::Ready(Some(response)) => response,
            State::Ready(None) => ApiResponse::failed(FullContactError::Channel),
            State::Pending(receiver) => receiver
                .blocking_recv()
                .unwrap_or_else(|_| ApiResponse::failed(FullContactError::Channel)),
        }
    }
}

impl<T> Future for ResponseHandle<T> {
    type Output = ApiResponse<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            State::Ready(slot) => Poll::Ready(
                slot.take()
                    .unwrap_or_else(|| ApiResponse::failed(FullContactError::Channel)),
            ),
            State::Pending(receiver) => Pin::new(receiver)
                .poll(cx)
                .map(|received| received.unwrap_or_else(|_| ApiResponse::failed(FullContactError::Channel))),
        }
    }
}

impl<T> std::fmt::Debug for ResponseHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}
