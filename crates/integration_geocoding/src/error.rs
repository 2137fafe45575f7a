//! Geocoding error types

use application::ApplicationError;
use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded")]
    RateLimited,

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Geocoding configuration error: {0}")]
    Configuration(String),
}

impl From<GeocodingError> for ApplicationError {
    fn from(err: GeocodingError) -> Self {
        match err {
            GeocodingError::Configuration(msg) => Self::Configuration(msg),
            // Throttling is an ordinary attempt failure: no backoff, the
            // caller's ladder just moves on.
            other => Self::ExternalService(other.to_string()),
        }
    }
}
