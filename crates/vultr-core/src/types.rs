//! Core Vultr domain types.
//!
//! The Vultr API exists in two incompatible generations. Everything that differs between
//! them (authentication header, body encoding, error classification) keys off
//! [`ApiVersion`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default Vultr API host.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com";

/// Header carrying the API key for v1 requests.
pub const LEGACY_KEY_HEADER: &str = "API-Key";

/// Supported Vultr API generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Legacy key-header API with flat `resource/action` endpoints.
    V1,
    /// Bearer-token, resource-oriented, paginated API.
    #[default]
    V2,
}

impl ApiVersion {
    /// Returns the version name as used in configuration (`v1` / `v2`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Returns the versioned path prefix appended to the API host.
    #[must_use]
    pub const fn path_prefix(&self) -> &'static str {
        match self {
            Self::V1 => "v1/",
            Self::V2 => "v2/",
        }
    }

    /// Returns true when HTTP status drives error classification.
    ///
    /// v1 responses are classified by body shape only.
    #[must_use]
    pub const fn uses_http_status(&self) -> bool {
        matches!(self, Self::V2)
    }

    /// Returns all supported API generations.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::V1, Self::V2]
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" | "legacy" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(Error::ConfigError(format!("Unknown Vultr API version: {other}"))),
        }
    }
}
