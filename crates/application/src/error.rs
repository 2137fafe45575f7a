//! Application-level errors
//!
//! Only two failure kinds are terminal and cross the pipeline boundary:
//! [`ApplicationError::PlaceNotFound`] and [`ApplicationError::NoStationNearby`].
//! Per-attempt upstream failures surface as `ExternalService` from single-shot
//! port calls and are swallowed inside the retry ladders.

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No geocoding variant produced a coordinate; carries the original input
    #[error("No coordinates found for place: {query}")]
    PlaceNotFound {
        /// The original, unsimplified place name as entered by the user
        query: String,
    },

    /// Both resolver tiers were exhausted without a usable stop
    #[error("No transit station found nearby")]
    NoStationNearby,

    /// External service error (network, decode, throttling)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// The two terminal failure kinds are never retried; only transient
    /// upstream failures qualify.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
