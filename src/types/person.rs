//! Person enrichment types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{is_populated, validate_location_and_name, Location, PersonName, Profile};
use super::household::Household;
use crate::errors::{FullContactError, FullContactResult};

const LOCATION_NAME_ERROR: &str =
    "If you want to use 'location'(or placekey) or 'name' as an input, both must be present and they must have non-blank values";

/// Accepted `hemType` values.
pub const HEM_TYPES: [&str; 3] = ["md5", "sha1", "sha256"];

/// Accepted `confidence` values.
pub const CONFIDENCE_LEVELS: [&str; 4] = ["LOW", "MED", "HIGH", "MAX"];

/// Request for `person.enrich`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    data_filter: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    maids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<PersonName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    profiles: Vec<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    partner_id: Option<String>,
    #[serde(rename = "li_nonid", skip_serializing_if = "Option::is_none")]
    li_non_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    infer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placekey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_maids: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    panorama_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hem_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_emails: Option<u32>,
}

impl PersonRequest {
    /// Creates a new request builder.
    pub fn builder() -> PersonRequestBuilder {
        PersonRequestBuilder::default()
    }

    /// Email addresses.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Phone numbers.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Data filters limiting the response sections.
    pub fn data_filter(&self) -> &[String] {
        &self.data_filter
    }

    /// Mobile advertising ids.
    pub fn maids(&self) -> &[String] {
        &self.maids
    }

    /// Postal address.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Person name.
    pub fn name(&self) -> Option<&PersonName> {
        self.name.as_ref()
    }

    /// Profiles.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Webhook for asynchronous delivery.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    /// Caller-side record id.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// FullContact person id.
    pub fn person_id(&self) -> Option<&str> {
        self.person_id.as_deref()
    }

    /// Confidence level.
    pub fn confidence(&self) -> Option<&str> {
        self.confidence.as_deref()
    }

    /// Hashed email type.
    pub fn hem_type(&self) -> Option<&str> {
        self.hem_type.as_deref()
    }

    /// Placekey.
    pub fn placekey(&self) -> Option<&str> {
        self.placekey.as_deref()
    }

    fn is_queryable(&self) -> bool {
        !self.emails.is_empty()
            || !self.phones.is_empty()
            || !self.profiles.is_empty()
            || !self.maids.is_empty()
            || is_populated(self.record_id.as_deref())
            || is_populated(self.person_id.as_deref())
            || is_populated(self.partner_id.as_deref())
            || is_populated(self.li_non_id.as_deref())
    }

    fn validate(&self) -> FullContactResult<()> {
        if let Some(hem_type) = self.hem_type.as_deref().filter(|v| !v.trim().is_empty()) {
            if !HEM_TYPES.contains(&hem_type) {
                return Err(FullContactError::validation(
                    "HemType value can only be 'md5', 'sha1', 'sha256'",
                ));
            }
        }

        if let Some(confidence) = self.confidence.as_deref().filter(|v| !v.trim().is_empty()) {
            if !CONFIDENCE_LEVELS.contains(&confidence) {
                return Err(FullContactError::validation(
                    "Confidence value can only be 'LOW', 'MED', 'HIGH', 'MAX'",
                ));
            }
        }

        if self.is_queryable() {
            return Ok(());
        }
        validate_location_and_name(
            self.location.as_ref(),
            self.name.as_ref(),
            self.placekey.as_deref(),
            LOCATION_NAME_ERROR,
        )
    }
}

/// Builder for [`PersonRequest`].
#[derive(Debug, Default)]
pub struct PersonRequestBuilder {
    draft: PersonRequest,
}

impl PersonRequestBuilder {
    /// Adds an email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.draft.emails.push(email.into());
        self
    }

    /// Adds emails.
    pub fn emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.emails.extend(emails.into_iter().map(Into::into));
        self
    }

    /// Adds a phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.draft.phones.push(phone.into());
        self
    }

    /// Adds phone numbers.
    pub fn phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.phones.extend(phones.into_iter().map(Into::into));
        self
    }

    /// Adds a data filter.
    pub fn data_filter(mut self, filter: impl Into<String>) -> Self {
        self.draft.data_filter.push(filter.into());
        self
    }

    /// Adds data filters.
    pub fn data_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.data_filter.extend(filters.into_iter().map(Into::into));
        self
    }

    /// Adds a mobile advertising id.
    pub fn maid(mut self, maid: impl Into<String>) -> Self {
        self.draft.maids.push(maid.into());
        self
    }

    /// Adds mobile advertising ids.
    pub fn maids<I, S>(mut self, maids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.maids.extend(maids.into_iter().map(Into::into));
        self
    }

    /// Sets the location.
    pub fn location(mut self, location: Location) -> Self {
        self.draft.location = Some(location);
        self
    }

    /// Sets the name.
    pub fn name(mut self, name: PersonName) -> Self {
        self.draft.name = Some(name);
        self
    }

    /// Adds a profile.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.draft.profiles.push(profile);
        self
    }

    /// Adds profiles.
    pub fn profiles(mut self, profiles: impl IntoIterator<Item = Profile>) -> Self {
        self.draft.profiles.extend(profiles);
        self
    }

    /// Sets the webhook URL.
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.draft.webhook_url = Some(url.into());
        self
    }

    /// Sets the record id.
    pub fn record_id(mut self, record_id: impl Into<String>) -> Self {
        self.draft.record_id = Some(record_id.into());
        self
    }

    /// Sets the person id.
    pub fn person_id(mut self, person_id: impl Into<String>) -> Self {
        self.draft.person_id = Some(person_id.into());
        self
    }

    /// Sets the partner id.
    pub fn partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.draft.partner_id = Some(partner_id.into());
        self
    }

    /// Sets the LinkedIn non-id.
    pub fn li_non_id(mut self, li_non_id: impl Into<String>) -> Self {
        self.draft.li_non_id = Some(li_non_id.into());
        self
    }

    /// Sets the confidence level (`LOW`, `MED`, `HIGH`, `MAX`).
    pub fn confidence(mut self, confidence: impl Into<String>) -> Self {
        self.draft.confidence = Some(confidence.into());
        self
    }

    /// Enables or disables inferred data.
    pub fn infer(mut self, infer: bool) -> Self {
        self.draft.infer = Some(infer);
        self
    }

    /// Sets the placekey.
    pub fn placekey(mut self, placekey: impl Into<String>) -> Self {
        self.draft.placekey = Some(placekey.into());
        self
    }

    /// Caps the number of returned mobile advertising ids.
    pub fn max_maids(mut self, max_maids: u32) -> Self {
        self.draft.max_maids = Some(max_maids);
        self
    }

    /// Sets the panorama id.
    pub fn panorama_id(mut self, panorama_id: impl Into<String>) -> Self {
        self.draft.panorama_id = Some(panorama_id.into());
        self
    }

    /// Sets the hashed email type (`md5`, `sha1`, `sha256`).
    pub fn hem_type(mut self, hem_type: impl Into<String>) -> Self {
        self.draft.hem_type = Some(hem_type.into());
        self
    }

    /// Caps the number of returned emails.
    pub fn max_emails(mut self, max_emails: u32) -> Self {
        self.draft.max_emails = Some(max_emails);
        self
    }

    /// Validates and builds the request.
    pub fn build(self) -> FullContactResult<PersonRequest> {
        self.draft.validate()?;
        Ok(self.draft)
    }
}

/// Response from `person.enrich`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonResponse {
    /// Full name.
    pub full_name: Option<String>,
    /// Age range, e.g. `30-39`.
    pub age_range: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Formatted location.
    pub location: Option<String>,
    /// Job title.
    pub title: Option<String>,
    /// Organization.
    pub organization: Option<String>,
    /// Twitter URL.
    pub twitter: Option<String>,
    /// LinkedIn URL.
    pub linkedin: Option<String>,
    /// Facebook URL.
    pub facebook: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Detailed insights.
    pub details: Option<PersonDetails>,
    /// Last update date.
    pub updated: Option<String>,
}

/// Detailed insights in a person response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonDetails {
    /// Structured name.
    pub name: Option<PersonName>,
    /// Age data.
    pub age: Option<Age>,
    /// Gender.
    pub gender: Option<String>,
    /// Emails with labels.
    pub emails: Vec<LabeledValue>,
    /// Phones with labels.
    pub phones: Vec<LabeledValue>,
    /// Profiles keyed by service.
    pub profiles: HashMap<String, serde_json::Value>,
    /// Known locations.
    pub locations: Vec<serde_json::Value>,
    /// Employment history.
    pub employment: Vec<Employment>,
    /// Photos.
    pub photos: Vec<LabeledValue>,
    /// Education.
    pub education: Vec<serde_json::Value>,
    /// URLs.
    pub urls: Vec<LabeledValue>,
    /// Interests.
    pub interests: Vec<serde_json::Value>,
    /// Household insights.
    pub household: Option<Household>,
    /// Identifiers linked to the person.
    pub identifiers: Option<Identifiers>,
}

/// Age data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Age {
    /// Age range.
    pub range: Option<String>,
    /// Exact value, when known.
    pub value: Option<i64>,
}

/// A labelled value such as an email or phone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabeledValue {
    /// Label, e.g. `work`.
    pub label: Option<String>,
    /// Value.
    pub value: Option<String>,
}

/// An employment record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Employment {
    /// Employer name.
    pub name: Option<String>,
    /// Employer domain.
    pub domain: Option<String>,
    /// Whether the position is current.
    pub current: Option<bool>,
    /// Job title.
    pub title: Option<String>,
}

/// Identifiers linked to a person.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identifiers {
    /// Mobile advertising ids.
    pub maids: Vec<serde_json::Value>,
    /// Person ids.
    pub person_ids: Vec<String>,
    /// Record ids.
    pub record_ids: Vec<String>,
    /// Partner ids.
    pub partner_ids: Vec<String>,
    /// LinkedIn non-id.
    #[serde(rename = "li_nonid")]
    pub li_non_id: Option<String>,
    /// Panorama id.
    pub panorama_id: Option<String>,
}
