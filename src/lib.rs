//! FullContact Client Library
//!
//! An async Rust client for the FullContact identity-enrichment API (v3).
//! Requests are validated by their builders before anything touches the
//! network, and every call returns a [`ResponseHandle`] that completes once
//! with an [`ApiResponse`].
//!
//! # Features
//!
//! - **Person & Company Enrichment**: `person.enrich`, `company.enrich`, `company.search`
//! - **Identity Resolution**: map, resolve, resolve with tags, map-resolve and delete
//! - **Tags & Audiences**: tag management and audience creation/download
//! - **Consent & Verification**: `permission.*`, `verify.*` and email verification
//! - **Retries**: pluggable [`RetryHandler`] keyed on HTTP status
//! - **Observability**: `tracing` events with optional subscriber setup
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fullcontact_client::{
//!     FullContactClient, ResolveRequest, StaticCredentialsProvider, StatusRetryHandler,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FullContactClient::builder()
//!         .credentials_provider(StaticCredentialsProvider::new("your-api-key")?)
//!         .retry_handler(StatusRetryHandler::rate_limited(2, 2000))
//!         .build()?;
//!
//!     let request = ResolveRequest::builder()
//!         .email("bart@fullcontact.com")
//!         .record_id("customer-123")
//!         .build()?;
//!
//!     let response = client.identity_map(&request).await;
//!     match response.result {
//!         Ok(mapped) => println!("record ids: {:?}", mapped.record_ids),
//!         Err(err) => eprintln!("{} ({})", err, response.status),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Blocking Callers
//!
//! ```rust,no_run
//! use fullcontact_client::{FullContactClient, EnvCredentialsProvider};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let client = FullContactClient::builder()
//!         .credentials_provider(EnvCredentialsProvider::from_default_env()?)
//!         .runtime_handle(runtime.handle().clone())
//!         .build()?;
//!
//!     let response = client.email_verification("bart@fullcontact.com").blocking_wait();
//!     println!("{:?}", response.payload());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod resilience;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use auth::{CredentialsProvider, EnvCredentialsProvider, StaticCredentialsProvider};
pub use client::{FullContactClient, FullContactClientBuilder};
pub use config::{FullContactConfig, FullContactConfigBuilder};
pub use errors::{FullContactError, FullContactResult};
pub use resilience::{DefaultRetryHandler, RetryHandler, StatusRetryHandler};
pub use services::ResponseHandle;

// Type re-exports
pub use types::audience::{AudienceRequest, AudienceRequestBuilder, AudienceResponse};
pub use types::common::{Location, LocationBuilder, PersonName, Profile, ProfileBuilder, Tag, TagBuilder};
pub use types::company::{
    CompanyRequest, CompanyRequestBuilder, CompanyResponse, CompanySearchLocation,
    CompanySearchResponse,
};
pub use types::household::Household;
pub use types::permission::{
    ConsentPurpose, ConsentPurposeResponse, PermissionCurrentResponse, PermissionFindResponse,
    PermissionRequest, PermissionRequestBuilder,
};
pub use types::person::{PersonDetails, PersonRequest, PersonRequestBuilder, PersonResponse};
pub use types::resolve::{
    ResolveRequest, ResolveRequestBuilder, ResolveResponse, ResolveResponseWithTags,
};
pub use types::response::{ApiResponse, EmptyResponse};
pub use types::tags::{TagsRequest, TagsRequestBuilder, TagsResponse};
pub use types::verification::{
    EmailVerificationResponse, VerifyActivityResponse, VerifyMatchResponse, VerifySignalsResponse,
};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
