//! Configuration module for the FullContact client.
//!
//! Configuration is validated once by [`FullContactConfigBuilder::build`] and
//! is read-only afterwards; every call shares the same frozen value.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};

use crate::auth::CredentialsProvider;
use crate::errors::{FullContactError, FullContactResult};
use crate::resilience::{DefaultRetryHandler, RetryHandler};

/// Client version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("FullContact_Rust_Client_V", env!("CARGO_PKG_VERSION"));

/// Conventional environment variable holding the API key.
pub const FC_API_KEY: &str = "FC_API_KEY";

/// Default base URL for the FullContact v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.fullcontact.com/v3/";

/// Default per-attempt timeout (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Endpoint paths relative to the base URL.
pub mod paths {
    /// Person enrichment.
    pub const PERSON_ENRICH: &str = "person.enrich";
    /// Company enrichment by domain.
    pub const COMPANY_ENRICH: &str = "company.enrich";
    /// Company search by name.
    pub const COMPANY_SEARCH: &str = "company.search";
    /// Map a record id to identifiers.
    pub const IDENTITY_MAP: &str = "identity.map";
    /// Resolve identifiers.
    pub const IDENTITY_RESOLVE: &str = "identity.resolve";
    /// Resolve identifiers and return tags.
    pub const IDENTITY_RESOLVE_WITH_TAGS: &str = "identity.resolve?tags=true";
    /// Map and resolve in one call.
    pub const IDENTITY_MAP_RESOLVE: &str = "identity.mapResolve";
    /// Delete a mapped record.
    pub const IDENTITY_DELETE: &str = "identity.delete";
    /// Add tags to a record.
    pub const TAGS_CREATE: &str = "tags.create";
    /// Read tags of a record.
    pub const TAGS_GET: &str = "tags.get";
    /// Remove tags from a record.
    pub const TAGS_DELETE: &str = "tags.delete";
    /// Create an audience.
    pub const AUDIENCE_CREATE: &str = "audience.create";
    /// Download an audience file.
    pub const AUDIENCE_DOWNLOAD: &str = "audience.download";
    /// Record consent.
    pub const PERMISSION_CREATE: &str = "permission.create";
    /// Revoke consent.
    pub const PERMISSION_DELETE: &str = "permission.delete";
    /// List consent records.
    pub const PERMISSION_FIND: &str = "permission.find";
    /// Current consent per purpose.
    pub const PERMISSION_CURRENT: &str = "permission.current";
    /// Verify consent for one purpose.
    pub const PERMISSION_VERIFY: &str = "permission.verify";
    /// Signals attached to an identity.
    pub const VERIFY_SIGNALS: &str = "verify.signals";
    /// Match scores for supplied signals.
    pub const VERIFY_MATCH: &str = "verify.match";
    /// Activity recency for supplied signals.
    pub const VERIFY_ACTIVITY: &str = "verify.activity";
    /// Email verification (v2, absolute).
    pub const EMAIL_VERIFICATION: &str = "https://api.fullcontact.com/v2/verification/email";
}

/// Configuration for the FullContact client.
#[derive(Clone)]
pub struct FullContactConfig {
    pub(crate) credentials: Arc<dyn CredentialsProvider>,
    pub(crate) retry_handler: Arc<dyn RetryHandler>,
    /// Base URL for API requests.
    pub base_url: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Static headers merged into every request.
    pub headers: HashMap<String, String>,
    request_headers: HeaderMap,
}

impl FullContactConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> FullContactConfigBuilder {
        FullContactConfigBuilder::new()
    }

    /// Returns the credentials provider.
    pub fn credentials(&self) -> &Arc<dyn CredentialsProvider> {
        &self.credentials
    }

    /// Returns the retry handler.
    pub fn retry_handler(&self) -> &Arc<dyn RetryHandler> {
        &self.retry_handler
    }

    /// Returns the header set sent with every request.
    ///
    /// Extra headers are merged last and replace a default of the same name,
    /// compared case-insensitively.
    pub fn request_headers(&self) -> HeaderMap {
        self.request_headers.clone()
    }
}

fn merge_headers(
    credentials: &dyn CredentialsProvider,
    extra: &HashMap<String, String>,
) -> FullContactResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
    credentials.apply_auth(&mut headers)?;

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            FullContactError::configuration(format!("Invalid header name: {}", name))
        })?;
        let value = HeaderValue::from_str(value).map_err(|_| {
            FullContactError::configuration(format!("Invalid value for header: {}", name))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

impl std::fmt::Debug for FullContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullContactConfig")
            .field("credentials", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("retry_attempts", &self.retry_handler.retry_attempts())
            .finish()
    }
}

/// Builder for `FullContactConfig`.
#[derive(Default)]
pub struct FullContactConfigBuilder {
    credentials: Option<Arc<dyn CredentialsProvider>>,
    retry_handler: Option<Arc<dyn RetryHandler>>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl FullContactConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials provider.
    pub fn credentials_provider(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    /// Sets a shared credentials provider.
    pub fn credentials_provider_arc(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Sets the retry handler.
    pub fn retry_handler(mut self, handler: impl RetryHandler + 'static) -> Self {
        self.retry_handler = Some(Arc::new(handler));
        self
    }

    /// Sets a shared retry handler.
    pub fn retry_handler_arc(mut self, handler: Arc<dyn RetryHandler>) -> Self {
        self.retry_handler = Some(handler);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the per-attempt timeout in milliseconds.
    pub fn timeout_millis(mut self, millis: u64) -> Self {
        self.timeout = Some(Duration::from_millis(millis));
        self
    }

    /// Merges static headers sent with every request.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Adds one static header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> FullContactResult<FullContactConfig> {
        let credentials = self
            .credentials
            .ok_or_else(|| FullContactError::configuration("Credentials provider is required"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = url::Url::parse(&base_url)?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(FullContactError::configuration(
                "Base URL must use http or https",
            ));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(FullContactError::configuration(
                "Timeout must be greater than zero",
            ));
        }

        let request_headers = merge_headers(credentials.as_ref(), &self.headers)?;

        Ok(FullContactConfig {
            credentials,
            retry_handler: self
                .retry_handler
                .unwrap_or_else(|| Arc::new(DefaultRetryHandler)),
            base_url,
            timeout,
            headers: self.headers,
            request_headers,
        })
    }
}
