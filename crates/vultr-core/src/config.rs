//! Client configuration.
//!
//! A [`VultrConfig`] names the credential, the API generation and the transport
//! settings. It can be built in code, deserialized from any serde format, or read from
//! the `VULTR_*` environment variables.

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::error::{Error, Result};
use crate::types::{ApiVersion, DEFAULT_BASE_URL};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "VULTR_API_KEY";
/// Environment variable selecting the API generation (`v1` / `v2`).
pub const ENV_API_VERSION: &str = "VULTR_API_VERSION";
/// Environment variable overriding the API host.
pub const ENV_BASE_URL: &str = "VULTR_BASE_URL";
/// Environment variable toggling TLS verification (`true` / `false`).
pub const ENV_TLS_VERIFY: &str = "VULTR_TLS_VERIFY";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Configuration for a Vultr API client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VultrConfig {
    /// Vultr API key. Redacted from `Debug` output.
    pub api_key: SecretString,

    /// API generation to talk to.
    #[serde(default)]
    pub api_version: ApiVersion,

    /// API host, without the version segment.
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whether to verify the peer certificate and host name.
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl VultrConfig {
    /// Create a configuration for the current API with default transport settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_version: ApiVersion::default(),
            base_url: default_base_url(),
            tls_verify: default_tls_verify(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Read configuration from the `VULTR_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when the key is missing or a value is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when the key is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::ConfigError(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);

        if let Some(version) = lookup(ENV_API_VERSION) {
            config.api_version = version.parse()?;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(verify) = lookup(ENV_TLS_VERIFY) {
            config.tls_verify = parse_flag(ENV_TLS_VERIFY, &verify)?;
        }

        config.validated()
    }

    /// Select the API generation.
    #[must_use]
    pub const fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Override the API host (useful for proxies and tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration, returning it unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid field.
    pub fn validated(self) -> Result<Self> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        Ok(self)
    }

    /// Versioned API root, e.g. `https://api.vultr.com/v2/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn versioned_base_url(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/{}", self.api_version.path_prefix()))
            .map_err(|e| Error::ConfigError(format!("Invalid Vultr base URL: {e}")))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::ConfigError(format!(
            "{name} must be true or false, got `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = VultrConfig::new("K");
        assert_eq!(config.api_version, ApiVersion::V2);
        assert_eq!(config.base_url, "https://api.vultr.com");
        assert!(config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = VultrConfig::new("super-secret-key");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
    }

    #[test]
    fn test_from_lookup() {
        let config = VultrConfig::from_lookup(lookup(&[
            ("VULTR_API_KEY", "K"),
            ("VULTR_API_VERSION", "v1"),
            ("VULTR_BASE_URL", "http://127.0.0.1:8080"),
            ("VULTR_TLS_VERIFY", "false"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.expose_secret(), "K");
        assert_eq!(config.api_version, ApiVersion::V1);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert!(!config.tls_verify);
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let err = VultrConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));

        let err = VultrConfig::from_lookup(lookup(&[("VULTR_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = VultrConfig::from_lookup(lookup(&[
            ("VULTR_API_KEY", "K"),
            ("VULTR_TLS_VERIFY", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));

        let err = VultrConfig::from_lookup(lookup(&[
            ("VULTR_API_KEY", "K"),
            ("VULTR_BASE_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_timeout_range() {
        assert!(VultrConfig::new("K").with_timeout(0).validated().is_err());
        assert!(VultrConfig::new("K").with_timeout(301).validated().is_err());
        assert!(VultrConfig::new("K").with_timeout(300).validated().is_ok());
    }

    #[test]
    fn test_versioned_base_url() {
        let config = VultrConfig::new("K").with_base_url("https://api.vultr.com/");
        assert_eq!(
            config.versioned_base_url().unwrap().as_str(),
            "https://api.vultr.com/v2/"
        );

        let legacy = config.with_api_version(ApiVersion::V1);
        assert_eq!(
            legacy.versioned_base_url().unwrap().as_str(),
            "https://api.vultr.com/v1/"
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: VultrConfig =
            serde_json::from_str(r#"{"api_key":"K","api_version":"v1"}"#).unwrap();
        assert_eq!(config.api_version, ApiVersion::V1);
        assert_eq!(config.timeout_secs, 20);
        assert!(config.tls_verify);
    }
}
