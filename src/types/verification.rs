//! Verification types: `verify.*` signals and v2 email verification.

use std::collections::HashMap;

use serde::Deserialize;

/// Response from the v2 email verification endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailVerificationResponse {
    /// Status echoed in the body.
    pub status: Option<u16>,
    /// Request id.
    pub request_id: Option<String>,
    /// Per-address results, keyed by the queried email.
    pub emails: HashMap<String, EmailDetails>,
}

/// Verification result for one address.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailDetails {
    /// Human-readable verdict.
    pub message: Option<String>,
    /// Normalized address.
    pub address: Option<String>,
    /// Local part.
    pub username: Option<String>,
    /// Domain part.
    pub domain: Option<String>,
    /// Whether the address was corrected.
    pub corrected: Option<bool>,
    /// Deliverability attributes.
    pub attributes: Option<EmailAttributes>,
    /// Whether mail can be sent safely.
    pub send_safely: Option<bool>,
}

/// Deliverability attributes of an address.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAttributes {
    /// Syntax is valid.
    pub valid_syntax: Option<bool>,
    /// Mailbox accepts mail.
    pub deliverable: Option<bool>,
    /// Domain accepts any mailbox.
    pub catchall: Option<bool>,
    /// Disposable provider.
    pub disposable: Option<bool>,
}

/// Response from `verify.signals`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifySignalsResponse {
    /// Emails linked to the identity.
    pub emails: Vec<SignalValue>,
    /// Phones linked to the identity.
    pub phones: Vec<SignalValue>,
    /// Mobile advertising ids linked to the identity.
    pub maids: Vec<SignalValue>,
    /// Names.
    pub name: Vec<serde_json::Value>,
    /// Addresses.
    pub physical_address: Vec<serde_json::Value>,
    /// Social profiles.
    pub social_profiles: Vec<serde_json::Value>,
    /// Ip addresses.
    pub ip_address: Vec<serde_json::Value>,
    /// Panorama id.
    pub panorama_id: Option<String>,
    /// Personal ids.
    pub person_ids: Vec<String>,
}

/// A signal with its recency and confidence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalValue {
    /// Signal value (email, phone, maid, md5...).
    pub value: Option<String>,
    /// Hashed form.
    pub md5: Option<String>,
    /// Type, e.g. `idfa`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// First seen date.
    pub first_seen_ms: Option<i64>,
    /// Last seen date.
    pub last_seen_ms: Option<i64>,
    /// Observation count.
    pub observations: Option<i64>,
    /// Confidence level.
    pub confidence: Option<f64>,
}

/// Response from `verify.match`: per-field match scores.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyMatchResponse {
    /// City.
    pub city: Option<bool>,
    /// Region.
    pub region: Option<bool>,
    /// Country.
    pub country: Option<bool>,
    /// Continent.
    pub continent: Option<bool>,
    /// Postal code.
    pub postal_code: Option<bool>,
    /// Family name.
    pub family_name: Option<bool>,
    /// Given name.
    pub given_name: Option<bool>,
    /// Phone.
    pub phone: Option<bool>,
    /// Email.
    pub email: Option<bool>,
    /// Mobile advertising id.
    pub maid: Option<bool>,
    /// Social profile.
    pub social: Option<bool>,
    /// LinkedIn non-id.
    pub non_id: Option<bool>,
    /// Overall risk, 0 to 1.
    pub risk: Option<f64>,
}

/// Response from `verify.activity`: recency scores per signal type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyActivityResponse {
    /// Email activity.
    pub emails: Option<f64>,
    /// Online activity.
    pub online: Option<f64>,
    /// Social activity.
    pub social: Option<f64>,
    /// Employment activity.
    pub employment: Option<f64>,
}
