//! Server configuration
//!
//! Loaded once from the process environment at startup. Missing credentials
//! fail fast here rather than per request.

use integration_geocoding::MapboxConfig;
use integration_transit::MbtaConfig;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// An environment variable holds an unusable value
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar {
        /// Variable name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Mapbox geocoding settings
    pub mapbox: MapboxConfig,
    /// MBTA transit settings
    pub mbta: MbtaConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// `MAPBOX_TOKEN` and `MBTA_API_KEY` are required; base URLs, host and
    /// port have defaults and may be overridden.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is absent or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mapbox_token =
            std::env::var("MAPBOX_TOKEN").map_err(|_| ConfigError::MissingVar("MAPBOX_TOKEN"))?;
        let mbta_api_key =
            std::env::var("MBTA_API_KEY").map_err(|_| ConfigError::MissingVar("MBTA_API_KEY"))?;

        let mut mapbox = MapboxConfig::new(mapbox_token);
        if let Ok(base_url) = std::env::var("MAPBOX_BASE_URL") {
            mapbox.base_url = base_url;
        }

        let mut mbta = MbtaConfig::new(mbta_api_key);
        if let Ok(base_url) = std::env::var("MBTA_BASE_URL") {
            mbta.base_url = base_url;
        }

        let mut server = ServerConfig::default();
        if let Ok(host) = std::env::var("STOPFINDER_HOST") {
            server.host = host;
        }
        if let Ok(port) = std::env::var("STOPFINDER_PORT") {
            server.port = port.parse().map_err(|_| ConfigError::InvalidVar {
                name: "STOPFINDER_PORT",
                reason: format!("{port} is not a valid port number"),
            })?;
        }

        let config = Self {
            server,
            mapbox,
            mbta,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mapbox
            .validate()
            .map_err(|reason| ConfigError::InvalidVar {
                name: "MAPBOX_TOKEN",
                reason,
            })?;
        self.mbta
            .validate()
            .map_err(|reason| ConfigError::InvalidVar {
                name: "MBTA_API_KEY",
                reason,
            })?;
        Ok(())
    }
}
