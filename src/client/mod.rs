//! FullContact API client.
//!
//! Provides one method per remote operation. Each method validates its
//! input, then either returns an already-completed handle carrying the
//! validation failure or spawns the HTTP exchange and returns at once.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Handle;

use crate::auth::{CredentialsProvider, EnvCredentialsProvider};
use crate::config::{paths, FullContactConfig, FullContactConfigBuilder};
use crate::errors::{FullContactError, FullContactResult};
use crate::resilience::RetryHandler;
use crate::services::{parse_json, Dispatcher, ResponseHandle};
use crate::transport::{HttpTransport, HttpTransportImpl};
use crate::types::audience::{AudienceRequest, AudienceResponse};
use crate::types::common::is_populated;
use crate::types::company::{CompanyRequest, CompanyResponse, CompanySearchResponse};
use crate::types::permission::{
    ConsentPurposeResponse, PermissionCurrentResponse, PermissionFindResponse, PermissionRequest,
};
use crate::types::person::{PersonRequest, PersonResponse};
use crate::types::resolve::{ResolveRequest, ResolveResponse, ResolveResponseWithTags};
use crate::types::response::{ApiResponse, EmptyResponse};
use crate::types::tags::{TagsGetRequest, TagsRequest, TagsResponse};
use crate::types::verification::{
    EmailVerificationResponse, VerifyActivityResponse, VerifyMatchResponse, VerifySignalsResponse,
};

fn no_check<R>(_: &R) -> FullContactResult<()> {
    Ok(())
}

fn rejected<T>(error: FullContactError) -> ResponseHandle<T> {
    tracing::debug!(error = %error, "Request rejected before dispatch");
    ResponseHandle::ready(ApiResponse::failed(error))
}

fn with_query(path: &str, name: &str, value: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(name, value)
        .finish();
    format!("{}?{}", path, query)
}

/// The FullContact client.
///
/// Cheap to clone; clones share the connection pool and configuration.
///
/// # Example
///
/// ```rust,no_run
/// use fullcontact_client::{FullContactClient, PersonRequest, StaticCredentialsProvider};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FullContactClient::builder()
///         .credentials_provider(StaticCredentialsProvider::new("your-api-key")?)
///         .build()?;
///
///     let request = PersonRequest::builder()
///         .email("bart@fullcontact.com")
///         .build()?;
///
///     let response = client.person_enrich(&request).await;
///     if let Some(person) = response.payload() {
///         println!("{:?}", person.full_name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct FullContactClient {
    config: Arc<FullContactConfig>,
    dispatcher: Dispatcher,
}

impl FullContactClient {
    /// Creates a new client builder.
    pub fn builder() -> FullContactClientBuilder {
        FullContactClientBuilder::new()
    }

    /// Creates a client authenticated from the `FC_API_KEY` variable.
    pub fn from_env() -> FullContactResult<Self> {
        Self::builder()
            .credentials_provider(EnvCredentialsProvider::from_default_env()?)
            .build()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FullContactConfig {
        &self.config
    }

    fn submit<R, T>(
        &self,
        path: &str,
        kind: &str,
        request: Option<&R>,
        check: fn(&R) -> FullContactResult<()>,
    ) -> ResponseHandle<T>
    where
        R: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let Some(request) = request else {
            return rejected(FullContactError::validation(format!(
                "{} Request can't be nil",
                kind
            )));
        };
        match check(request) {
            Ok(()) => self.dispatcher.post_json(path, request),
            Err(err) => rejected(err),
        }
    }

    /// Enriches a person.
    pub fn person_enrich<'a>(
        &self,
        request: impl Into<Option<&'a PersonRequest>>,
    ) -> ResponseHandle<PersonResponse> {
        self.submit(paths::PERSON_ENRICH, "Person", request.into(), no_check)
    }

    /// Enriches a company by domain.
    pub fn company_enrich<'a>(
        &self,
        request: impl Into<Option<&'a CompanyRequest>>,
    ) -> ResponseHandle<CompanyResponse> {
        self.submit(
            paths::COMPANY_ENRICH,
            "Company",
            request.into(),
            CompanyRequest::validate_for_enrich,
        )
    }

    /// Searches companies by name.
    pub fn company_search<'a>(
        &self,
        request: impl Into<Option<&'a CompanyRequest>>,
    ) -> ResponseHandle<Vec<CompanySearchResponse>> {
        self.submit(
            paths::COMPANY_SEARCH,
            "Company",
            request.into(),
            CompanyRequest::validate_for_search,
        )
    }

    /// Maps identifiers to a caller-side record id.
    pub fn identity_map<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<ResolveResponse> {
        self.submit(
            paths::IDENTITY_MAP,
            "Resolve",
            request.into(),
            ResolveRequest::validate_for_map,
        )
    }

    /// Resolves identifiers to record and person ids.
    pub fn identity_resolve<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<ResolveResponse> {
        self.submit(
            paths::IDENTITY_RESOLVE,
            "Resolve",
            request.into(),
            ResolveRequest::validate_for_resolve,
        )
    }

    /// Resolves identifiers and returns the record's tags.
    pub fn identity_resolve_with_tags<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<ResolveResponseWithTags> {
        self.submit(
            paths::IDENTITY_RESOLVE_WITH_TAGS,
            "Resolve",
            request.into(),
            ResolveRequest::validate_for_resolve,
        )
    }

    /// Maps and resolves in one call.
    pub fn identity_map_resolve<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<ResolveResponse> {
        self.submit(
            paths::IDENTITY_MAP_RESOLVE,
            "Resolve",
            request.into(),
            ResolveRequest::validate_for_map,
        )
    }

    /// Deletes a mapped record.
    pub fn identity_delete<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<EmptyResponse> {
        self.submit(
            paths::IDENTITY_DELETE,
            "Resolve",
            request.into(),
            ResolveRequest::validate_for_delete,
        )
    }

    /// Adds tags to a record.
    pub fn tags_create<'a>(
        &self,
        request: impl Into<Option<&'a TagsRequest>>,
    ) -> ResponseHandle<TagsResponse> {
        self.submit(paths::TAGS_CREATE, "Tags", request.into(), no_check)
    }

    /// Reads the tags of a record.
    pub fn tags_get(&self, record_id: &str) -> ResponseHandle<TagsResponse> {
        if !is_populated(Some(record_id)) {
            return rejected(FullContactError::validation(
                "recordId param must be specified",
            ));
        }
        self.dispatcher
            .post_json(paths::TAGS_GET, &TagsGetRequest { record_id })
    }

    /// Removes tags from a record.
    pub fn tags_delete<'a>(
        &self,
        request: impl Into<Option<&'a TagsRequest>>,
    ) -> ResponseHandle<EmptyResponse> {
        self.submit(paths::TAGS_DELETE, "Tags", request.into(), no_check)
    }

    /// Starts building an audience; the response carries the request id.
    pub fn audience_create<'a>(
        &self,
        request: impl Into<Option<&'a AudienceRequest>>,
    ) -> ResponseHandle<AudienceResponse> {
        self.submit(paths::AUDIENCE_CREATE, "Audience", request.into(), no_check)
    }

    /// Downloads a finished audience as raw gzip bytes.
    pub fn audience_download(&self, request_id: &str) -> ResponseHandle<AudienceResponse> {
        if !is_populated(Some(request_id)) {
            return rejected(FullContactError::validation(
                "requestId param must be specified",
            ));
        }
        self.dispatcher.get(
            with_query(paths::AUDIENCE_DOWNLOAD, "requestId", request_id),
            |body| Ok(AudienceResponse::from_download(body)),
        )
    }

    /// Verifies an email address (v2 endpoint).
    pub fn email_verification(&self, email: &str) -> ResponseHandle<EmailVerificationResponse> {
        if !is_populated(Some(email)) {
            return rejected(FullContactError::validation("Email can't be empty"));
        }
        self.dispatcher.get(
            with_query(paths::EMAIL_VERIFICATION, "email", email),
            parse_json::<EmailVerificationResponse>,
        )
    }

    /// Records consent.
    pub fn permission_create<'a>(
        &self,
        request: impl Into<Option<&'a PermissionRequest>>,
    ) -> ResponseHandle<EmptyResponse> {
        self.submit(
            paths::PERMISSION_CREATE,
            "Permission",
            request.into(),
            PermissionRequest::validate_for_create,
        )
    }

    /// Revokes all consent for an identity.
    pub fn permission_delete<'a>(
        &self,
        request: impl Into<Option<&'a PermissionRequest>>,
    ) -> ResponseHandle<EmptyResponse> {
        self.submit(paths::PERMISSION_DELETE, "Permission", request.into(), no_check)
    }

    /// Lists consent records for an identity.
    pub fn permission_find<'a>(
        &self,
        request: impl Into<Option<&'a PermissionRequest>>,
    ) -> ResponseHandle<Vec<PermissionFindResponse>> {
        self.submit(paths::PERMISSION_FIND, "Permission", request.into(), no_check)
    }

    /// Current consent per purpose and channel.
    pub fn permission_current<'a>(
        &self,
        request: impl Into<Option<&'a PermissionRequest>>,
    ) -> ResponseHandle<PermissionCurrentResponse> {
        self.submit(paths::PERMISSION_CURRENT, "Permission", request.into(), no_check)
    }

    /// Consent state for one purpose and channel.
    pub fn permission_verify<'a>(
        &self,
        request: impl Into<Option<&'a PermissionRequest>>,
    ) -> ResponseHandle<ConsentPurposeResponse> {
        self.submit(
            paths::PERMISSION_VERIFY,
            "Permission",
            request.into(),
            PermissionRequest::validate_for_verify,
        )
    }

    /// Signals known for an identity.
    pub fn verify_signals<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<VerifySignalsResponse> {
        self.submit(paths::VERIFY_SIGNALS, "Resolve", request.into(), no_check)
    }

    /// Match scores for the supplied signals.
    pub fn verify_match<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<VerifyMatchResponse> {
        self.submit(paths::VERIFY_MATCH, "Resolve", request.into(), no_check)
    }

    /// Activity recency for the supplied signals.
    pub fn verify_activity<'a>(
        &self,
        request: impl Into<Option<&'a ResolveRequest>>,
    ) -> ResponseHandle<VerifyActivityResponse> {
        self.submit(paths::VERIFY_ACTIVITY, "Resolve", request.into(), no_check)
    }
}

impl std::fmt::Debug for FullContactClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullContactClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the FullContact client.
#[derive(Default)]
pub struct FullContactClientBuilder {
    config_builder: FullContactConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    runtime: Option<Handle>,
}

impl FullContactClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials provider. Required.
    pub fn credentials_provider(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.config_builder = self.config_builder.credentials_provider(provider);
        self
    }

    /// Sets a shared credentials provider.
    pub fn credentials_provider_arc(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.config_builder = self.config_builder.credentials_provider_arc(provider);
        self
    }

    /// Merges static headers sent with every request.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.config_builder = self.config_builder.headers(headers);
        self
    }

    /// Adds one static header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the per-attempt timeout in milliseconds.
    pub fn timeout_millis(mut self, millis: u64) -> Self {
        self.config_builder = self.config_builder.timeout_millis(millis);
        self
    }

    /// Sets the retry handler.
    pub fn retry_handler(mut self, handler: impl RetryHandler + 'static) -> Self {
        self.config_builder = self.config_builder.retry_handler(handler);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the runtime calls are spawned on.
    ///
    /// Defaults to the runtime `build()` is called from.
    pub fn runtime_handle(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Builds the client.
    pub fn build(self) -> FullContactResult<FullContactClient> {
        let config = Arc::new(self.config_builder.build()?);

        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| {
                FullContactError::configuration(
                    "A Tokio runtime is required; build inside one or set runtime_handle",
                )
            })?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransportImpl::new(&config.base_url, config.timeout).map_err(|e| {
                    FullContactError::configuration(e.to_string())
                })?,
            ),
        };

        tracing::debug!(
            base_url = %config.base_url,
            timeout = ?config.timeout,
            key_hint = %config.credentials().key_hint(),
            "FullContact client built"
        );

        Ok(FullContactClient {
            dispatcher: Dispatcher::new(Arc::clone(&config), transport, runtime),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentialsProvider;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::transport::HttpMethod;
    use crate::types::common::Tag;
    use pretty_assertions::assert_eq;

    fn client(transport: &Arc<MockTransport>) -> FullContactClient {
        FullContactClient::builder()
            .credentials_provider(StaticCredentialsProvider::new("test-key").unwrap())
            .transport(Arc::clone(transport) as Arc<dyn HttpTransport>)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_without_runtime_fails() {
        let result = FullContactClient::builder()
            .credentials_provider(StaticCredentialsProvider::new("test-key").unwrap())
            .build();
        assert!(matches!(result, Err(FullContactError::Configuration { .. })));
    }

    #[test]
    fn test_build_with_explicit_runtime() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json_str(200, r#"{"recordId":"k1","tags":[]}"#));

        let client = FullContactClient::builder()
            .credentials_provider(StaticCredentialsProvider::new("test-key").unwrap())
            .transport(Arc::clone(&transport) as Arc<dyn HttpTransport>)
            .runtime_handle(runtime.handle().clone())
            .build()
            .unwrap();

        let response = client.tags_get("k1").blocking_wait();
        assert_eq!(response.payload().unwrap().record_id.as_deref(), Some("k1"));
    }

    #[tokio::test]
    async fn test_absent_request() {
        let transport = Arc::new(MockTransport::new());
        let client = client(&transport);

        let response = client.person_enrich(None).await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: Person Request can't be nil"
        );
        let response = client.company_search(None).await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: Company Request can't be nil"
        );
        let response = client.audience_create(None).await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: Audience Request can't be nil"
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_company_business_validation() {
        let transport = Arc::new(MockTransport::new());
        let client = client(&transport);
        let by_name = CompanyRequest::builder().company_name("FullContact").build().unwrap();

        let response = client.company_enrich(&by_name).await;
        assert_eq!(response.status_code, 0);
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: Company Domain is mandatory for Company Enrich"
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_company_search_parses_list() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json_str(
            200,
            r#"[{"organizationName":"FullContact Inc","lookupDomain":"fullcontact.com"}]"#,
        ));
        let client = client(&transport);
        let request = CompanyRequest::builder().company_name("FullContact").build().unwrap();

        let response = client.company_search(&request).await;
        let hits = response.payload().unwrap();
        assert_eq!(hits[0].lookup_domain.as_deref(), Some("fullcontact.com"));
        assert_eq!(transport.last_request().unwrap().path, "company.search");
    }

    #[tokio::test]
    async fn test_tags_get_validation_and_body() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json_str(200, r#"{"recordId":"k1","tags":[{"key":"gender","value":"male"}]}"#));
        let client = client(&transport);

        let response = client.tags_get(" ").await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: recordId param must be specified"
        );
        assert_eq!(transport.request_count(), 0);

        let response = client.tags_get("k1").await;
        assert_eq!(response.payload().unwrap().tags, vec![Tag::new("gender", "male")]);
        let request = transport.last_request().unwrap();
        assert_eq!(request.path, "tags.get");
        assert_eq!(request.json_body().unwrap(), serde_json::json!({"recordId": "k1"}));
    }

    #[tokio::test]
    async fn test_audience_download() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::bytes(200, b"\x1f\x8b\x08binary".to_vec()));
        let client = client(&transport);

        let response = client.audience_download("id with space").await;

        assert_eq!(response.payload().unwrap().audience_bytes().as_ref(), b"\x1f\x8b\x08binary");
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "audience.download?requestId=id+with+space");
    }

    #[tokio::test]
    async fn test_audience_download_requires_id() {
        let transport = Arc::new(MockTransport::new());
        let response = client(&transport).audience_download("").await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: requestId param must be specified"
        );
    }

    #[tokio::test]
    async fn test_email_verification() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::json_str(200, r#"{"status":200,"emails":{}}"#));
        let client = client(&transport);

        let response = client.email_verification("").await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: Email can't be empty"
        );

        let response = client.email_verification("bart+1@fullcontact.com").await;
        assert_eq!(response.payload().unwrap().status, Some(200));
        assert_eq!(
            transport.last_request().unwrap().path,
            "https://api.fullcontact.com/v2/verification/email?email=bart%2B1%40fullcontact.com"
        );
    }

    #[tokio::test]
    async fn test_permission_create_validation() {
        let transport = Arc::new(MockTransport::new());
        let client = client(&transport);
        let query = ResolveRequest::builder().email("bart@fullcontact.com").build().unwrap();
        let request = PermissionRequest::builder().query(query).build().unwrap();

        let response = client.permission_create(&request).await;
        assert_eq!(
            response.error().unwrap().to_string(),
            "FullContactError: Consent purposes can't be empty"
        );
        assert_eq!(transport.request_count(), 0);

        transport.queue(MockResponse::json_str(200, "[]"));
        let response = client.permission_find(&request).await;
        assert!(response.payload().unwrap().is_empty());
        assert_eq!(transport.last_request().unwrap().path, "permission.find");
    }

    #[tokio::test]
    async fn test_empty_body_on_delete() {
        let transport = Arc::new(MockTransport::new());
        transport.queue(MockResponse::empty(204));
        let client = client(&transport);
        let request = ResolveRequest::builder().record_id("r1").build().unwrap();

        let response = client.identity_delete(&request).await;

        assert!(response.is_successful());
        assert_eq!(response.status_code, 204);
        assert_eq!(response.status, "204 No Content");
    }

    #[test]
    fn test_with_query_encodes() {
        assert_eq!(with_query("a", "k", "x y&z"), "a?k=x+y%26z");
    }
}
