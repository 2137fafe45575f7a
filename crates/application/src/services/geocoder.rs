//! Progressive geocoding service
//!
//! Resolves a free-text place name to a coordinate by trying the input
//! verbatim first and, if that yields nothing, a simplified variant with
//! everything after the first comma dropped. Addresses shaped like
//! "street, city, state zip" frequently fail exact geocoding while the bare
//! street part succeeds, so the truncation recovers that class of input
//! without a full address parser.

use std::sync::Arc;

use domain::value_objects::GeoLocation;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// Ordered query variants for a place name
///
/// Always non-empty: the original string first, then the trimmed substring
/// before the first comma when it differs from the original. At most two.
#[must_use]
pub fn query_variants(place_name: &str) -> Vec<String> {
    let mut variants = vec![place_name.to_string()];

    if let Some((prefix, _)) = place_name.split_once(',') {
        let simplified = prefix.trim();
        if simplified != place_name {
            variants.push(simplified.to_string());
        }
    }

    variants
}

/// Resolves free-text place names to coordinates via the geocoding port
#[derive(Clone)]
pub struct GeocoderService {
    geocoding: Arc<dyn GeocodingPort>,
}

impl std::fmt::Debug for GeocoderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderService")
            .field("geocoding", &"<GeocodingPort>")
            .finish()
    }
}

impl GeocoderService {
    /// Create a new geocoder service
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding }
    }

    /// Resolve a place name to a coordinate
    ///
    /// Each variant is one upstream round trip. A transport or decode
    /// failure during an attempt counts as a miss for that attempt only;
    /// the error surfaces solely through variant exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::PlaceNotFound`] carrying the original
    /// input when no variant yields a feature with a usable coordinate.
    #[instrument(skip(self))]
    pub async fn locate(&self, place_name: &str) -> Result<GeoLocation, ApplicationError> {
        for variant in query_variants(place_name) {
            match self.geocoding.forward_search(&variant, 1).await {
                Ok(features) => {
                    // The top-ranked feature decides the attempt; a first
                    // feature without geometry is a miss, not a reason to
                    // inspect lower-ranked ones.
                    if let Some(location) = features.first().and_then(|f| f.location) {
                        debug!(%variant, %location, "Geocoded place name");
                        return Ok(location);
                    }
                    debug!(%variant, "Geocode attempt returned no usable feature");
                },
                Err(e) => {
                    warn!(%variant, error = %e, "Geocode attempt failed, trying next variant");
                },
            }
        }

        Err(ApplicationError::PlaceNotFound {
            query: place_name.to_string(),
        })
    }
}
