//! Consent (permission) management types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::is_populated;
use super::resolve::ResolveRequest;
use crate::errors::{FullContactError, FullContactResult};

/// One purpose a person consented to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPurpose {
    /// Purpose id.
    pub purpose_id: u32,
    /// Channels the consent covers, e.g. `web`.
    pub channel: Vec<String>,
    /// Time to live, in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Whether consent is granted.
    pub enabled: bool,
}

impl ConsentPurpose {
    /// Creates a granted purpose for the given channels.
    pub fn new<I, S>(purpose_id: u32, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            purpose_id,
            channel: channels.into_iter().map(Into::into).collect(),
            ttl: None,
            enabled: true,
        }
    }
}

/// Request for the `permission.*` endpoints.
///
/// `permission.create` needs consent purposes and the collection fields;
/// `permission.verify` needs a purpose id and channel; the others only a
/// query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<ResolveRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    consent_purposes: Vec<ConsentPurpose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terms_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
}

impl PermissionRequest {
    /// Creates a new request builder.
    pub fn builder() -> PermissionRequestBuilder {
        PermissionRequestBuilder::default()
    }

    /// Identity the permission applies to.
    pub fn query(&self) -> Option<&ResolveRequest> {
        self.query.as_ref()
    }

    /// Consent purposes.
    pub fn consent_purposes(&self) -> &[ConsentPurpose] {
        &self.consent_purposes
    }

    /// How consent was collected.
    pub fn collection_method(&self) -> Option<&str> {
        self.collection_method.as_deref()
    }

    /// Where consent was collected.
    pub fn collection_location(&self) -> Option<&str> {
        self.collection_location.as_deref()
    }

    /// Purpose to verify.
    pub fn purpose_id(&self) -> Option<u32> {
        self.purpose_id
    }

    /// Channel to verify.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub(crate) fn validate_for_create(&self) -> FullContactResult<()> {
        if self.consent_purposes.is_empty() {
            return Err(FullContactError::validation(
                "Consent purposes can't be empty",
            ));
        }
        if !is_populated(self.collection_method.as_deref())
            || !is_populated(self.collection_location.as_deref())
        {
            return Err(FullContactError::validation(
                "Collection method and collection location must be populated",
            ));
        }
        Ok(())
    }

    pub(crate) fn validate_for_verify(&self) -> FullContactResult<()> {
        if self.purpose_id.is_none() || !is_populated(self.channel.as_deref()) {
            return Err(FullContactError::validation(
                "Purpose id and channel must be populated",
            ));
        }
        Ok(())
    }
}

/// Builder for [`PermissionRequest`].
#[derive(Debug, Default)]
pub struct PermissionRequestBuilder {
    draft: PermissionRequest,
}

impl PermissionRequestBuilder {
    /// Sets the identity query.
    pub fn query(mut self, query: ResolveRequest) -> Self {
        self.draft.query = Some(query);
        self
    }

    /// Adds a consent purpose.
    pub fn consent_purpose(mut self, purpose: ConsentPurpose) -> Self {
        self.draft.consent_purposes.push(purpose);
        self
    }

    /// Adds consent purposes.
    pub fn consent_purposes(mut self, purposes: impl IntoIterator<Item = ConsentPurpose>) -> Self {
        self.draft.consent_purposes.extend(purposes);
        self
    }

    /// Sets the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.draft.locale = Some(locale.into());
        self
    }

    /// Sets the IP address consent was given from.
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.draft.ip_address = Some(ip_address.into());
        self
    }

    /// Sets the language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.draft.language = Some(language.into());
        self
    }

    /// Sets the collection method.
    pub fn collection_method(mut self, method: impl Into<String>) -> Self {
        self.draft.collection_method = Some(method.into());
        self
    }

    /// Sets the collection location.
    pub fn collection_location(mut self, location: impl Into<String>) -> Self {
        self.draft.collection_location = Some(location.into());
        self
    }

    /// Sets the policy URL.
    pub fn policy_url(mut self, url: impl Into<String>) -> Self {
        self.draft.policy_url = Some(url.into());
        self
    }

    /// Sets the terms of service reference.
    pub fn terms_service(mut self, terms: impl Into<String>) -> Self {
        self.draft.terms_service = Some(terms.into());
        self
    }

    /// Sets the purpose to verify.
    pub fn purpose_id(mut self, purpose_id: u32) -> Self {
        self.draft.purpose_id = Some(purpose_id);
        self
    }

    /// Sets the channel to verify.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.draft.channel = Some(channel.into());
        self
    }

    /// Validates and builds the request.
    pub fn build(self) -> FullContactResult<PermissionRequest> {
        if self.draft.query.is_none() {
            return Err(FullContactError::validation("Query can't be empty"));
        }
        Ok(self.draft)
    }
}

/// State of one consent purpose as stored by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsentPurposeResponse {
    /// Purpose id.
    pub purpose_id: Option<u32>,
    /// Purpose name.
    pub purpose_name: Option<String>,
    /// Channel.
    pub channel: Option<String>,
    /// Time to live, in days.
    pub ttl: Option<u32>,
    /// Whether consent is granted.
    pub enabled: Option<bool>,
    /// Last change, epoch milliseconds.
    pub timestamp: Option<i64>,
}

/// One stored permission record from `permission.find`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionFindResponse {
    /// Permission type, e.g. `create`.
    pub permission_type: Option<String>,
    /// Permission id.
    pub permission_id: Option<String>,
    /// Purposes in this record.
    pub consent_purposes: Vec<ConsentPurposeResponse>,
    /// Locale.
    pub locale: Option<String>,
    /// IP address.
    pub ip_address: Option<String>,
    /// Language.
    pub language: Option<String>,
    /// Collection method.
    pub collection_method: Option<String>,
    /// Collection location.
    pub collection_location: Option<String>,
    /// Policy URL.
    pub policy_url: Option<String>,
    /// Terms of service.
    pub terms_service: Option<String>,
    /// Creation time, epoch milliseconds.
    pub timestamp: Option<i64>,
    /// Creation date.
    pub created: Option<i64>,
}

/// Current consent, keyed by purpose id then channel.
pub type PermissionCurrentResponse = HashMap<String, HashMap<String, ConsentPurposeResponse>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> ResolveRequest {
        ResolveRequest::builder()
            .email("bart@fullcontact.com")
            .build()
            .unwrap()
    }

    #[test]
    fn test_permission_request_requires_query() {
        let err = PermissionRequest::builder()
            .consent_purpose(ConsentPurpose::new(1, ["web"]))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "FullContactError: Query can't be empty");
    }

    #[test]
    fn test_permission_create_rules() {
        let request = PermissionRequest::builder().query(query()).build().unwrap();
        assert_eq!(
            request.validate_for_create().unwrap_err().to_string(),
            "FullContactError: Consent purposes can't be empty"
        );

        let request = PermissionRequest::builder()
            .query(query())
            .consent_purpose(ConsentPurpose::new(1, ["web"]))
            .collection_method("cookiePopUp")
            .build()
            .unwrap();
        assert_eq!(
            request.validate_for_create().unwrap_err().to_string(),
            "FullContactError: Collection method and collection location must be populated"
        );

        let request = PermissionRequest::builder()
            .query(query())
            .consent_purpose(ConsentPurpose::new(1, ["web"]))
            .collection_method("cookiePopUp")
            .collection_location("https://example.com")
            .build()
            .unwrap();
        assert!(request.validate_for_create().is_ok());
    }

    #[test]
    fn test_permission_verify_rules() {
        let request = PermissionRequest::builder()
            .query(query())
            .purpose_id(1)
            .build()
            .unwrap();
        assert!(request.validate_for_verify().is_err());

        let request = PermissionRequest::builder()
            .query(query())
            .purpose_id(1)
            .channel("web")
            .build()
            .unwrap();
        assert!(request.validate_for_verify().is_ok());
    }

    #[test]
    fn test_permission_request_serialization() {
        let request = PermissionRequest::builder()
            .query(query())
            .consent_purpose(ConsentPurpose::new(2, ["web", "email"]))
            .collection_method("cookiePopUp")
            .collection_location("Homepage")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"query":{"emails":["bart@fullcontact.com"]},"consentPurposes":[{"purposeId":2,"channel":["web","email"],"enabled":true}],"collectionMethod":"cookiePopUp","collectionLocation":"Homepage"}"#
        );
    }

    #[test]
    fn test_permission_current_parsing() {
        let json = r#"{"1":{"web":{"purposeId":1,"purposeName":"Data Sale","channel":"web","enabled":true,"ttl":365}}}"#;
        let current: PermissionCurrentResponse = serde_json::from_str(json).unwrap();
        let web = &current["1"]["web"];
        assert_eq!(web.purpose_name.as_deref(), Some("Data Sale"));
        assert_eq!(web.enabled, Some(true));
    }
}
