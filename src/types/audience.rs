//! Audience creation and download types.

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::common::{is_populated, validate_tags, Tag};
use crate::errors::{FullContactError, FullContactResult};

/// Request for `audience.create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<String>,
    tags: Vec<Tag>,
}

impl AudienceRequest {
    /// Creates a new request builder.
    pub fn builder() -> AudienceRequestBuilder {
        AudienceRequestBuilder::default()
    }

    /// Webhook notified when the audience is ready.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    /// Tags selecting the audience.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Builder for [`AudienceRequest`].
#[derive(Debug, Default)]
pub struct AudienceRequestBuilder {
    draft: AudienceRequest,
}

impl AudienceRequestBuilder {
    /// Sets the webhook URL.
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.draft.webhook_url = Some(url.into());
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
    pub fn build(self) -> FullContactResult<AudienceRequest> {
        if !is_populated(self.draft.webhook_url.as_deref()) {
            return Err(FullContactError::validation("WebhookUrl can't be empty"));
        }
        if self.draft.tags.is_empty() {
            return Err(FullContactError::validation("Tags can't be empty"));
        }
        validate_tags(&self.draft.tags)?;
        Ok(self.draft)
    }
}

/// Response from `audience.create` and `audience.download`.
///
/// `audience.create` fills `request_id`; `audience.download` fills the raw
/// gzip payload instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudienceResponse {
    /// Id to pass to `audience.download`.
    pub request_id: Option<String>,
    #[serde(skip)]
    audience_bytes: Bytes,
}

impl AudienceResponse {
    pub(crate) fn from_download(body: Bytes) -> Self {
        Self {
            request_id: None,
            audience_bytes: body,
        }
    }

    /// Downloaded audience payload (gzip-compressed JSON).
    pub fn audience_bytes(&self) -> &Bytes {
        &self.audience_bytes
    }

    /// Writes the downloaded payload to `path`, replacing any existing file.
    pub async fn write_audience_bytes_to_file(
        &self,
        path: impl AsRef<Path>,
    ) -> FullContactResult<()> {
        tokio::fs::write(path, &self.audience_bytes).await?;
        Ok(())
    }
}
