//! Records shared by several request types.

use serde::{Deserialize, Serialize};

use crate::errors::{FullContactError, FullContactResult};

pub(crate) const TAG_ERROR: &str = "Both Key and Value must be populated for adding a Tag";

/// Returns true when the value is present and not blank.
pub(crate) fn is_populated(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Postal address of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region or state name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Region or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Location {
    /// Creates a new location builder.
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }

    /// Returns true when the address is complete enough to query by.
    ///
    /// Requires addressLine1 with either a postal code or a city plus a
    /// region (or region code).
    pub fn is_valid(&self) -> bool {
        is_populated(self.address_line1.as_deref())
            && (is_populated(self.postal_code.as_deref())
                || (is_populated(self.city.as_deref())
                    && (is_populated(self.region.as_deref())
                        || is_populated(self.region_code.as_deref()))))
    }
}

/// Builder for [`Location`].
#[derive(Debug, Default)]
pub struct LocationBuilder {
    location: Location,
}

impl LocationBuilder {
    /// Sets the first address line.
    pub fn address_line1(mut self, value: impl Into<String>) -> Self {
        self.location.address_line1 = Some(value.into());
        self
    }

    /// Sets the second address line.
    pub fn address_line2(mut self, value: impl Into<String>) -> Self {
        self.location.address_line2 = Some(value.into());
        self
    }

    /// Sets the city.
    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.location.city = Some(value.into());
        self
    }

    /// Sets the region.
    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.location.region = Some(value.into());
        self
    }

    /// Sets the region code.
    pub fn region_code(mut self, value: impl Into<String>) -> Self {
        self.location.region_code = Some(value.into());
        self
    }

    /// Sets the postal code.
    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.location.postal_code = Some(value.into());
        self
    }

    /// Builds the location.
    pub fn build(self) -> Location {
        self.location
    }
}

/// Name of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

impl PersonName {
    /// Creates a name from a full name.
    pub fn full(full: impl Into<String>) -> Self {
        Self {
            full: Some(full.into()),
            ..Default::default()
        }
    }

    /// Creates a name from given and family names.
    pub fn given_family(given: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            given: Some(given.into()),
            family: Some(family.into()),
            full: None,
        }
    }

    /// Returns true when a full name or both given and family are present.
    pub fn is_valid(&self) -> bool {
        is_populated(self.full.as_deref())
            || (is_populated(self.given.as_deref()) && is_populated(self.family.as_deref()))
    }
}

/// Social or professional profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Service name, e.g. `twitter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Username on the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Numeric user id on the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    /// Profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Profile {
    /// Creates a new profile builder.
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Creates a profile from a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// Builder for [`Profile`].
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    /// Sets the service.
    pub fn service(mut self, value: impl Into<String>) -> Self {
        self.profile.service = Some(value.into());
        self
    }

    /// Sets the username.
    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.profile.username = Some(value.into());
        self
    }

    /// Sets the user id.
    pub fn userid(mut self, value: impl Into<String>) -> Self {
        self.profile.userid = Some(value.into());
        self
    }

    /// Sets the URL.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.profile.url = Some(value.into());
        self
    }

    /// Builds the profile.
    pub fn build(self) -> FullContactResult<Profile> {
        let p = &self.profile;
        let has_url = is_populated(p.url.as_deref());
        let has_handle = is_populated(p.service.as_deref())
            && (is_populated(p.username.as_deref()) || is_populated(p.userid.as_deref()));

        if !has_url && !has_handle {
            return Err(FullContactError::validation(
                "Profile requires url or service with username/userid",
            ));
        }
        Ok(self.profile)
    }
}

/// Key/value label attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key.
    #[serde(default)]
    pub key: String,
    /// Tag value.
    #[serde(default)]
    pub value: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a new tag builder.
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }

    /// Returns true when key and value are populated and free of `'`.
    pub fn is_valid(&self) -> bool {
        !self.key.trim().is_empty()
            && !self.value.trim().is_empty()
            && !self.key.contains('\'')
            && !self.value.contains('\'')
    }
}

/// Builder for [`Tag`].
#[derive(Debug, Default)]
pub struct TagBuilder {
    tag: Tag,
}

impl TagBuilder {
    /// Sets the key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.tag.key = key.into();
        self
    }

    /// Sets the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.tag.value = value.into();
        self
    }

    /// Builds the tag; validity is checked by the request carrying it.
    pub fn build(self) -> Tag {
        self.tag
    }
}

// The API rejects apostrophes in tags; that case shares the populated-key
// message with blank keys and values.
pub(crate) fn validate_tags(tags: &[Tag]) -> FullContactResult<()> {
    if tags.iter().all(Tag::is_valid) {
        Ok(())
    } else {
        Err(FullContactError::validation(TAG_ERROR))
    }
}

/// Checks the location/name pairing for requests without a direct identifier.
///
/// Accepted: nothing supplied; a placekey without a name; or a valid
/// location together with a valid name. Everything else fails with
/// `mismatch_message`.
pub(crate) fn validate_location_and_name(
    location: Option<&Location>,
    name: Option<&PersonName>,
    placekey: Option<&str>,
    mismatch_message: &str,
) -> FullContactResult<()> {
    let has_placekey = is_populated(placekey);
    match (location, name) {
        (None, None) => Ok(()),
        (_, None) if has_placekey => Ok(()),
        (Some(location), Some(name)) => {
            if !location.is_valid() {
                return Err(FullContactError::validation(
                    "Location data requires addressLine1 and postalCode or addressLine1, city and regionCode (or region)",
                ));
            }
            if !name.is_valid() {
                return Err(FullContactError::validation(
                    "Name data requires full name or given and family name",
                ));
            }
            Ok(())
        }
        _ => Err(FullContactError::validation(mismatch_message)),
    }
}
