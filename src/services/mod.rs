//! Asynchronous delivery of API calls.
//!
//! Each call runs in its own task on the client's runtime and completes a
//! [`ResponseHandle`] exactly once.

mod dispatch;
mod handle;

pub(crate) use dispatch::{parse_json, Dispatcher};
pub use handle::ResponseHandle;
