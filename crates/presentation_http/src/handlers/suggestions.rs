//! Autocomplete suggestion handler

use application::SuggestionEntry;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Query parameters for the suggestion endpoint
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Partial place-name query as typed so far
    #[serde(default)]
    pub q: String,
}

/// Live-typing autocomplete suggestions
///
/// GET /v1/suggestions?q=..
///
/// Always responds 200 with a JSON array; an empty array is a valid,
/// non-error response.
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Json<Vec<SuggestionEntry>> {
    Json(state.suggestions.suggest(&params.q).await)
}
