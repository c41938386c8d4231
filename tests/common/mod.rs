//! Shared helpers for integration tests.

#![allow(dead_code)]

use fullcontact_client::{
    FullContactClient, FullContactClientBuilder, RetryHandler, StaticCredentialsProvider,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer};

pub const TEST_API_KEY: &str = "test-api-key";

/// Base URL of the mock server, shaped like the real v3 root.
pub fn base_url(server: &MockServer) -> String {
    format!("{}/v3/", server.uri())
}

/// Builder pointed at the mock server.
pub fn builder(server: &MockServer) -> FullContactClientBuilder {
    FullContactClient::builder()
        .credentials_provider(StaticCredentialsProvider::new(TEST_API_KEY).unwrap())
        .base_url(base_url(server))
}

/// Client with the default (no-retry) handler.
pub fn client(server: &MockServer) -> FullContactClient {
    builder(server).build().unwrap()
}

/// Client with a custom retry handler.
pub fn client_with_retry(server: &MockServer, handler: impl RetryHandler + 'static) -> FullContactClient {
    builder(server).retry_handler(handler).build().unwrap()
}

/// Authenticated POST matcher for a v3 endpoint.
pub fn post_v3(endpoint: &str) -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path(format!("/v3/{}", endpoint)))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
}
