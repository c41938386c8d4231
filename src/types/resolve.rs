//! Identity resolution types.

use serde::{Deserialize, Serialize};

use super::common::{is_populated, validate_location_and_name, validate_tags, Location, PersonName, Profile, Tag};
use crate::errors::{FullContactError, FullContactResult};

const LOCATION_NAME_ERROR: &str =
    "If you want to use 'location' or 'name' as an input, both must be present and they must have non-blank values";

/// Request for the identity map/resolve/delete endpoints.
///
/// Also serves as the multi-field query for the verify and permission
/// endpoints. Field order here is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    maids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<PersonName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    profiles: Vec<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    partner_id: Option<String>,
    #[serde(rename = "li_nonid", skip_serializing_if = "Option::is_none")]
    li_non_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placekey: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl ResolveRequest {
    /// Creates a new request builder.
    pub fn builder() -> ResolveRequestBuilder {
        ResolveRequestBuilder::default()
    }

    /// Email addresses.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Phone numbers.
    pub fn phones(&self) -> &[String] {
        &self.phones
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

    /// Caller-side record id.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// FullContact person id.
    pub fn person_id(&self) -> Option<&str> {
        self.person_id.as_deref()
    }

    /// Partner id.
    pub fn partner_id(&self) -> Option<&str> {
        self.partner_id.as_deref()
    }

    /// LinkedIn non-id.
    pub fn li_non_id(&self) -> Option<&str> {
        self.li_non_id.as_deref()
    }

    /// Placekey.
    pub fn placekey(&self) -> Option<&str> {
        self.placekey.as_deref()
    }

    /// Tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
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

    /// True when something other than record/person id identifies the person.
    fn has_map_signal(&self) -> bool {
        !self.emails.is_empty()
            || !self.phones.is_empty()
            || !self.profiles.is_empty()
            || !self.maids.is_empty()
            || (self.location.is_some() && self.name.is_some())
            || (is_populated(self.placekey.as_deref()) && self.name.is_some())
            || is_populated(self.partner_id.as_deref())
            || is_populated(self.li_non_id.as_deref())
    }

    fn validate(&self) -> FullContactResult<()> {
        validate_tags(&self.tags)?;
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

    /// Rules for `identity.map` and `identity.mapResolve`.
    pub(crate) fn validate_for_map(&self) -> FullContactResult<()> {
        if is_populated(self.person_id.as_deref()) {
            return Err(FullContactError::validation(
                "Invalid map request, person id must be empty",
            ));
        }
        if !self.has_map_signal() {
            return Err(FullContactError::validation(
                "Invalid map request, Any of Email, Phone, SocialProfile, Name and Location must be present",
            ));
        }
        Ok(())
    }

    /// Rules for `identity.resolve`.
    pub(crate) fn validate_for_resolve(&self) -> FullContactResult<()> {
        if is_populated(self.record_id.as_deref()) && is_populated(self.person_id.as_deref()) {
            return Err(FullContactError::validation(
                "Both record id and person id are populated, please select one",
            ));
        }
        Ok(())
    }

    /// Rules for `identity.delete`.
    pub(crate) fn validate_for_delete(&self) -> FullContactResult<()> {
        if !is_populated(self.record_id.as_deref()) {
            return Err(FullContactError::validation(
                "recordId param must be specified",
            ));
        }
        Ok(())
    }
}

/// Builder for [`ResolveRequest`].
#[derive(Debug, Default)]
pub struct ResolveRequestBuilder {
    draft: ResolveRequest,
}

impl ResolveRequestBuilder {
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

    /// Sets the placekey.
    pub fn placekey(mut self, placekey: impl Into<String>) -> Self {
        self.draft.placekey = Some(placekey.into());
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.draft.tags.push(tag);
        self
    }

    /// Adds tags.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.draft.tags.extend(tags);
        self
    }

    /// Validates and builds the request.
    pub fn build(self) -> FullContactResult<ResolveRequest> {
        self.draft.validate()?;
        Ok(self.draft)
    }
}

/// Response from `identity.map`, `identity.resolve` and `identity.mapResolve`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveResponse {
    /// Mapped record ids.
    pub record_ids: Vec<String>,
    /// Resolved person ids.
    pub person_ids: Vec<String>,
    /// Partner ids.
    pub partner_ids: Vec<String>,
}

/// Response from `identity.resolve?tags=true`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveResponseWithTags {
    /// Mapped record ids.
    pub record_ids: Vec<String>,
    /// Resolved person ids.
    pub person_ids: Vec<String>,
    /// Partner ids.
    pub partner_ids: Vec<String>,
    /// Tags attached to the record.
    pub tags: Vec<Tag>,
}
