//! Tag management types.

use serde::{Deserialize, Serialize};

use super::common::{is_populated, validate_tags, Tag};
use crate::errors::{FullContactError, FullContactResult};

/// Request for `tags.create` and `tags.delete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    partner_id: Option<String>,
    tags: Vec<Tag>,
}

impl TagsRequest {
    /// Creates a new request builder.
    pub fn builder() -> TagsRequestBuilder {
        TagsRequestBuilder::default()
    }

    /// Record the tags belong to.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Partner id.
    pub fn partner_id(&self) -> Option<&str> {
        self.partner_id.as_deref()
    }

    /// Tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Builder for [`TagsRequest`].
#[derive(Debug, Default)]
pub struct TagsRequestBuilder {
    draft: TagsRequest,
}

impl TagsRequestBuilder {
    /// Sets the record id.
    pub fn record_id(mut self, record_id: impl Into<String>) -> Self {
        self.draft.record_id = Some(record_id.into());
        self
    }

    /// Sets the partner id.
    pub fn partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.draft.partner_id = Some(partner_id.into());
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
    pub fn build(self) -> FullContactResult<TagsRequest> {
        if !is_populated(self.draft.record_id.as_deref()) {
            return Err(FullContactError::validation(
                "recordId param must be specified",
            ));
        }
        if self.draft.tags.is_empty() {
            return Err(FullContactError::validation("Tags can't be empty"));
        }
        validate_tags(&self.draft.tags)?;
        Ok(self.draft)
    }
}

/// Body of a `tags.get` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TagsGetRequest<'a> {
    pub(crate) record_id: &'a str,
}

/// Response from `tags.create` and `tags.get`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagsResponse {
    /// Record the tags belong to.
    pub record_id: Option<String>,
    /// Partner id.
    pub partner_id: Option<String>,
    /// Tags on the record.
    pub tags: Vec<Tag>,
}
