//! Application services - Use case implementations

mod geocoder;
mod stop_finder;
mod suggestions;

pub use geocoder::{GeocoderService, query_variants};
pub use stop_finder::{NearestStop, StopFinderService};
pub use suggestions::{MAX_SUGGESTIONS, SuggestionEntry, SuggestionService};
