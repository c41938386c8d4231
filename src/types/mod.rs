//! Request and response types for the FullContact API.
//!
//! Every request is produced by a builder whose `build()` validates the
//! field-presence rules the API enforces, so an invalid request never
//! leaves the caller's process.

pub mod audience;
pub mod common;
pub mod company;
pub mod household;
pub mod permission;
pub mod person;
pub mod resolve;
pub mod response;
pub mod tags;
pub mod verification;
