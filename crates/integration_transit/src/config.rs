//! Transit service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the MBTA v3 API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MbtaConfig {
    /// Base URL for the MBTA API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// MBTA API key (required)
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size for the unfiltered fallback fetch; a tunable bound
    #[serde(default = "default_fallback_page_limit")]
    pub fallback_page_limit: u32,
}

fn default_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_fallback_page_limit() -> u32 {
    1000
}

impl MbtaConfig {
    /// Create a configuration with defaults for everything but the key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
            fallback_page_limit: default_fallback_page_limit(),
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            fallback_page_limit: 100,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. An absent API key
    /// is a startup-time fatal condition.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.fallback_page_limit == 0 {
            return Err("fallback_page_limit must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MbtaConfig::new("key");
        assert_eq!(config.base_url, "https://api-v3.mbta.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.fallback_page_limit, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_api_key() {
        let config = MbtaConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_fallback_limit() {
        let config = MbtaConfig {
            fallback_page_limit: 0,
            ..MbtaConfig::new("key")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_applies_defaults() {
        let config: MbtaConfig = serde_json::from_str(r#"{"api_key": "key"}"#).unwrap();
        assert_eq!(config.base_url, "https://api-v3.mbta.com");
        assert_eq!(config.fallback_page_limit, 1000);
    }
}
