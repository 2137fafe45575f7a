//! Transit error types

use application::ApplicationError;
use thiserror::Error;

/// Errors that can occur during transit stop lookups
#[derive(Debug, Error)]
pub enum TransitError {
    /// Connection to the transit service failed
    #[error("Transit connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the transit service failed
    #[error("Transit request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response from the transit service
    #[error("Transit parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Transit rate limit exceeded")]
    RateLimited,

    /// Request timeout
    #[error("Transit request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Transit configuration error: {0}")]
    Configuration(String),
}

impl From<TransitError> for ApplicationError {
    fn from(err: TransitError) -> Self {
        match err {
            TransitError::Configuration(msg) => Self::Configuration(msg),
            other => Self::ExternalService(other.to_string()),
        }
    }
}
