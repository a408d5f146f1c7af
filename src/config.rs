//! Client configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which endpoint is queried and how the HTTP
//! client is built. It deserializes with every field optional so it can be
//! embedded in a host application's TOML config.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// Base endpoint of the Kakao search REST API.
pub const KAKAO_REST_API_URL: &str = "https://dapi.kakao.com/v2/search";

/// Configuration for a [`crate::SearchClient`].
///
/// Use [`Default::default()`] for the production endpoint, or construct with
/// field overrides (a mock server base URL in tests, for instance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API base URL without a trailing slash. The service name is appended
    /// as the next path segment.
    pub base_url: String,
    /// HTTP request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,
    /// Custom User-Agent string. If `None`, reqwest's default is sent.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: KAKAO_REST_API_URL.to_owned(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Config pointing at a different base URL, other fields defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must not be empty and must parse as an absolute URL
    /// - `base_url` must not end with `/`
    /// - `timeout_seconds`, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.base_url.is_empty() {
            return Err(SearchError::Config("base_url must not be empty".into()));
        }
        if self.base_url.ends_with('/') {
            return Err(SearchError::Config(
                "base_url must not end with '/'".into(),
            ));
        }
        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(SearchError::Config(format!("base_url is not a valid URL: {e}")));
        }
        if self.timeout_seconds == Some(0) {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
