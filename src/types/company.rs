//! Company enrichment and search types.

use serde::{Deserialize, Serialize};

use super::common::is_populated;
use crate::errors::{FullContactError, FullContactResult};

/// Accepted `sort` values for company search.
pub const SORT_VALUES: [&str; 3] = ["traffic", "relevance", "employees"];

/// Request for `company.enrich` and `company.search`.
///
/// Enrich uses `domain`; search uses `companyName` plus the optional
/// geography filters and `sort`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<String>,
}

impl CompanyRequest {
    /// Creates a new request builder.
    pub fn builder() -> CompanyRequestBuilder {
        CompanyRequestBuilder::default()
    }

    /// Company domain.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Company name.
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Sort order for search results.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Street-level location filter.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// City filter.
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    /// Region filter.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Country filter.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Webhook for asynchronous delivery.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    pub(crate) fn validate_for_enrich(&self) -> FullContactResult<()> {
        if !is_populated(self.domain.as_deref()) {
            return Err(FullContactError::validation(
                "Company Domain is mandatory for Company Enrich",
            ));
        }
        Ok(())
    }

    pub(crate) fn validate_for_search(&self) -> FullContactResult<()> {
        if !is_populated(self.company_name.as_deref()) {
            return Err(FullContactError::validation(
                "Company Name is mandatory for Company Search",
            ));
        }
        Ok(())
    }
}

/// Builder for [`CompanyRequest`].
#[derive(Debug, Default)]
pub struct CompanyRequestBuilder {
    draft: CompanyRequest,
}

impl CompanyRequestBuilder {
    /// Sets the domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.draft.domain = Some(domain.into());
        self
    }

    /// Sets the company name.
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.draft.company_name = Some(name.into());
        self
    }

    /// Sets the sort order (`traffic`, `relevance`, `employees`).
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.draft.sort = Some(sort.into());
        self
    }

    /// Sets the location filter.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.draft.location = Some(location.into());
        self
    }

    /// Sets the city filter.
    pub fn locality(mut self, locality: impl Into<String>) -> Self {
        self.draft.locality = Some(locality.into());
        self
    }

    /// Sets the region filter.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.draft.region = Some(region.into());
        self
    }

    /// Sets the country filter.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.draft.country = Some(country.into());
        self
    }

    /// Sets the webhook URL.
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.draft.webhook_url = Some(url.into());
        self
    }

    /// Validates and builds the request.
    pub fn build(self) -> FullContactResult<CompanyRequest> {
        if let Some(sort) = self.draft.sort.as_deref().filter(|v| !v.trim().is_empty()) {
            if !SORT_VALUES.contains(&sort) {
                return Err(FullContactError::validation(
                    "Sort value can only be 'traffic', 'relevance', 'employees'",
                ));
            }
        }
        Ok(self.draft)
    }
}

/// Response from `company.enrich`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyResponse {
    /// Company name.
    pub name: Option<String>,
    /// Location string.
    pub location: Option<String>,
    /// Twitter URL.
    pub twitter: Option<String>,
    /// LinkedIn URL.
    pub linkedin: Option<String>,
    /// Facebook URL.
    pub facebook: Option<String>,
    /// Short description.
    pub bio: Option<String>,
    /// Logo URL.
    pub logo: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Year founded.
    pub founded: Option<i64>,
    /// Employee count.
    pub employees: Option<i64>,
    /// Locale.
    pub locale: Option<String>,
    /// Category.
    pub category: Option<String>,
    /// Detailed insights, passed through untyped.
    pub details: Option<serde_json::Value>,
    /// Last update date.
    pub updated: Option<String>,
}

/// One entry of a `company.search` result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySearchResponse {
    /// Matched company name.
    pub organization_name: Option<String>,
    /// Domain to use with `company.enrich`.
    pub lookup_domain: Option<String>,
    /// Company logo.
    pub logo: Option<String>,
    /// Street-level location.
    pub location: Option<CompanySearchLocation>,
}

/// Location of a company search hit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySearchLocation {
    /// City.
    pub locality: Option<String>,
    /// Region.
    pub region: Option<String>,
    /// Country.
    pub country: Option<String>,
}
