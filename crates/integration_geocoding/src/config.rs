//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Mapbox Search Box geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Base URL for the Search Box forward endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Mapbox access token (required)
    pub access_token: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size requested for suggestion lookups
    #[serde(default = "default_page_limit")]
    pub page_limit: u8,
}

fn default_base_url() -> String {
    "https://api.mapbox.com/search/searchbox/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_page_limit() -> u8 {
    5
}

impl MapboxConfig {
    /// Create a configuration with defaults for everything but the token
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            access_token: access_token.into(),
            timeout_secs: default_timeout_secs(),
            page_limit: default_page_limit(),
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: "test-token".to_string(),
            timeout_secs: 5,
            page_limit: default_page_limit(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. An absent access
    /// token is a startup-time fatal condition, not a per-request one.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.access_token.is_empty() {
            return Err("access_token must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.page_limit == 0 {
            return Err("page_limit must be greater than 0".to_string());
        }

        Ok(())
    }
}
