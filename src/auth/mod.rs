//! Credentials providers for the FullContact client.
//!
//! A provider is a snapshot of an API key taken once at construction time.
//! The key is carried as a bearer credential on every request.

use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::config::FC_API_KEY;
use crate::errors::{FullContactError, FullContactResult};

/// Supplies the API key used to authenticate requests.
pub trait CredentialsProvider: Send + Sync {
    /// Returns the API key.
    fn api_key(&self) -> &SecretString;

    /// Inserts the bearer `Authorization` header, replacing any existing one.
    fn apply_auth(&self, headers: &mut HeaderMap) -> FullContactResult<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key().expose_secret()))
            .map_err(|_| FullContactError::configuration("API Key is not a valid header value"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Returns the last four characters of the key for diagnostics.
    fn key_hint(&self) -> String {
        let key = self.api_key().expose_secret();
        let count = key.chars().count();
        if count > 4 {
            let tail: String = key.chars().skip(count - 4).collect();
            format!("...{}", tail)
        } else {
            "****".to_string()
        }
    }
}

/// Wraps a caller-supplied API key.
pub struct StaticCredentialsProvider {
    api_key: SecretString,
}

impl StaticCredentialsProvider {
    /// Creates a provider, failing if the key is blank.
    pub fn new(api_key: impl Into<String>) -> FullContactResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FullContactError::configuration("API Key can't be empty"));
        }
        Ok(Self {
            api_key: SecretString::new(api_key),
        })
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

impl std::fmt::Debug for StaticCredentialsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialsProvider")
            .field("api_key", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .finish()
    }
}

/// Reads the API key from an environment variable at construction.
pub struct EnvCredentialsProvider {
    api_key: SecretString,
    var_name: String,
}

impl EnvCredentialsProvider {
    /// Reads `var_name`, failing if it is unset or blank.
    pub fn new(var_name: impl Into<String>) -> FullContactResult<Self> {
        let var_name = var_name.into();
        match std::env::var(&var_name) {
            Ok(api_key) if !api_key.trim().is_empty() => Ok(Self {
                api_key: SecretString::new(api_key),
                var_name,
            }),
            _ => Err(FullContactError::configuration(format!(
                "Couldn't find valid API Key from ENV variable: {}",
                var_name
            ))),
        }
    }

    /// Reads the conventional `FC_API_KEY` variable.
    pub fn from_default_env() -> FullContactResult<Self> {
        Self::new(FC_API_KEY)
    }

    /// Returns the variable the key was read from.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl CredentialsProvider for EnvCredentialsProvider {
    fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

impl std::fmt::Debug for EnvCredentialsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvCredentialsProvider")
            .field("var_name", &self.var_name)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_apply_auth() {
        let provider = StaticCredentialsProvider::new("fc_test_key_12345").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer stale"));

        provider.apply_auth(&mut headers).unwrap();

        assert_eq!(headers.get_all("Authorization").iter().count(), 1);
        assert_eq!(headers["Authorization"], "Bearer fc_test_key_12345");
        assert!(headers["Authorization"].is_sensitive());
    }

    #[test]
    fn test_apply_auth_rejects_unprintable_key() {
        let provider = StaticCredentialsProvider::new("fc_key\nInjected: yes").unwrap();
        let mut headers = HeaderMap::new();

        let err = provider.apply_auth(&mut headers).unwrap_err();

        assert_eq!(
            err.to_string(),
            "FullContactError: API Key is not a valid header value"
        );
        assert!(headers.is_empty());
    }

    #[test]
    fn test_static_provider_rejects_blank_key() {
        let err = StaticCredentialsProvider::new("   ").unwrap_err();
        assert_eq!(err.to_string(), "FullContactError: API Key can't be empty");
    }

    #[test]
    fn test_env_provider_reads_variable() {
        std::env::set_var("FC_CLIENT_TEST_KEY_PRESENT", "env_key_9876");
        let provider = EnvCredentialsProvider::new("FC_CLIENT_TEST_KEY_PRESENT").unwrap();
        assert_eq!(provider.api_key().expose_secret(), "env_key_9876");
        assert_eq!(provider.var_name(), "FC_CLIENT_TEST_KEY_PRESENT");
    }

    #[test]
    fn test_env_provider_missing_variable() {
        let err = EnvCredentialsProvider::new("FC_CLIENT_TEST_KEY_MISSING").unwrap_err();
        assert_eq!(
            err.to_string(),
            "FullContactError: Couldn't find valid API Key from ENV variable: FC_CLIENT_TEST_KEY_MISSING"
        );
    }

    #[test]
    fn test_env_provider_blank_variable() {
        std::env::set_var("FC_CLIENT_TEST_KEY_BLANK", "");
        assert!(EnvCredentialsProvider::new("FC_CLIENT_TEST_KEY_BLANK").is_err());
    }

    #[test]
    fn test_key_hint() {
        let provider = StaticCredentialsProvider::new("fc_test_key_12345").unwrap();
        assert_eq!(provider.key_hint(), "...2345");

        let short = StaticCredentialsProvider::new("abc").unwrap();
        assert_eq!(short.key_hint(), "****");
    }

    #[test]
    fn test_debug_redacts_key() {
        let provider = StaticCredentialsProvider::new("fc_secret_key").unwrap();
        let debug_str = format!("{:?}", provider);

        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("fc_secret_key"));
    }
}
