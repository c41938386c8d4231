//! Resilience layer for the FullContact client.
//!
//! Retries are driven entirely by HTTP status through a pluggable
//! [`RetryHandler`]. The default handler performs no retries.

mod retry;

pub use retry::{DefaultRetryHandler, RetryExecutor, RetryHandler, StatusRetryHandler};
