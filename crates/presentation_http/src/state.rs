//! Application state shared across handlers

use std::sync::Arc;

use application::{StopFinderService, SuggestionService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolution facade: place name to nearest stop
    pub stop_finder: Arc<StopFinderService>,
    /// Autocomplete suggestion service
    pub suggestions: Arc<SuggestionService>,
}
