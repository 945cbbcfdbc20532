//! Client configuration.

use serde::{Deserialize, Serialize};

/// Production API origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.mercanta.io";

/// Environment variable overriding the API origin.
pub const BASE_URL_ENV: &str = "MERCANTA_BASE_URL";

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base origin, e.g. https://api.mercanta.io
    pub base_url: String,
    /// Request timeout (seconds); the transport default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Create config pointed at the given origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Default::default()
        }
    }

    /// Build from environment variables
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            cfg.base_url = normalize_base_url(base_url);
        }

        cfg
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

// Paths are joined by plain concatenation, so the origin must not end in '/'.
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
