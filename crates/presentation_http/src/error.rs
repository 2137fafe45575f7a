//! API error handling
//!
//! Maps application failures to HTTP responses with actionable guidance:
//! an unresolvable place name and an out-of-coverage location each get a
//! distinct message, anything transient gets a generic retry message.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or unusable request input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested place or stop could not be found
    #[error("Not found: {0}")]
    NotFound(String),

    /// An upstream provider failed
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::ServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                "An error occurred while searching. Please try again.".to_string(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::PlaceNotFound { query } => Self::NotFound(format!(
                "Could not find location '{query}'. Check the spelling, try a simpler name \
                 (e.g. 'Boston Common' instead of a full street address), or use just the \
                 city or neighborhood name."
            )),
            ApplicationError::NoStationNearby => Self::NotFound(
                "No transit station found near that location. Make sure the location is \
                 within the MBTA coverage area."
                    .to_string(),
            ),
            ApplicationError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::Configuration(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_not_found_names_the_input() {
        let api_err: ApiError = ApplicationError::PlaceNotFound {
            query: "zzzxyq".to_string(),
        }
        .into();
        assert!(matches!(&api_err, ApiError::NotFound(msg) if msg.contains("zzzxyq")));
    }

    #[test]
    fn test_no_station_nearby_mentions_coverage() {
        let api_err: ApiError = ApplicationError::NoStationNearby.into();
        assert!(matches!(&api_err, ApiError::NotFound(msg) if msg.contains("coverage")));
    }

    #[test]
    fn test_external_service_maps_to_unavailable() {
        let api_err: ApiError =
            ApplicationError::ExternalService("HTTP 502".to_string()).into();
        assert!(matches!(api_err, ApiError::ServiceUnavailable(_)));
    }
}
