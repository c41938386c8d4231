//! Observability for the FullContact client.
//!
//! The library emits `tracing` events and spans; applications that want them
//! on stdout can install a subscriber with [`init_logging`].

mod logging;

pub use logging::{init_logging, redact, LogFormat, LogLevel, LoggingConfig};
