//! Nearest-stop handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the nearest-stop endpoint
#[derive(Debug, Deserialize)]
pub struct NearestStopRequest {
    /// Free-text place name or address
    pub place_name: String,
}

/// Response for a successful resolution
#[derive(Debug, Serialize)]
pub struct NearestStopResponse {
    /// The place name that was resolved
    pub place_name: String,
    /// Name of the nearest transit stop
    pub station_name: String,
    /// Whether the stop is marked wheelchair accessible
    pub wheelchair_accessible: bool,
}

/// Resolve a place name to the nearest transit stop
///
/// POST /v1/stops/nearest
#[instrument(skip(state, request), fields(place_name = %request.place_name))]
pub async fn nearest_stop(
    State(state): State<AppState>,
    Json(request): Json<NearestStopRequest>,
) -> Result<Json<NearestStopResponse>, ApiError> {
    let place_name = request.place_name.trim();

    if place_name.is_empty() {
        return Err(ApiError::BadRequest(
            "Please enter a place name or address. The field cannot be empty.".to_string(),
        ));
    }

    if place_name.chars().count() < 2 {
        return Err(ApiError::BadRequest(
            "Please enter at least 2 characters.".to_string(),
        ));
    }

    if !place_name.chars().any(char::is_alphabetic) {
        return Err(ApiError::BadRequest(
            "Please enter a valid place name or address. Include letters in your input."
                .to_string(),
        ));
    }

    let nearest = state.stop_finder.find_stop_near(place_name).await?;

    info!(station = %nearest.name, accessible = nearest.accessible, "Resolved nearest stop");

    Ok(Json(NearestStopResponse {
        place_name: place_name.to_string(),
        station_name: nearest.name,
        wheelchair_accessible: nearest.accessible,
    }))
}
