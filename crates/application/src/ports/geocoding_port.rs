//! Forward-geocoding port
//!
//! Defines the interface for forward geocoding: free-text query in, a page
//! of candidate features out. One call is one upstream round trip; retry
//! ladders live in the services, not here.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A single candidate result returned by the geocoding provider
///
/// Ephemeral: consumed once per request to build either a coordinate or an
/// autocomplete entry, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFeature {
    /// Primary feature name (e.g. "Boston Common", "123 Main St")
    pub name: Option<String>,
    /// Provider-formatted address line (may include country/zip segments)
    pub place_formatted: Option<String>,
    /// Provider feature type (e.g. "place", "address", "poi")
    pub feature_type: Option<String>,
    /// Region name from the feature context (state/province)
    pub region: Option<String>,
    /// District name from the feature context (county)
    pub district: Option<String>,
    /// Feature coordinate, when the geometry was present and well-formed
    pub location: Option<GeoLocation>,
}

impl PlaceFeature {
    /// Create a named feature (test/builder convenience)
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attach a coordinate
    #[must_use]
    pub const fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// Port for forward-geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Issue a single forward-geocode query, returning up to `limit` features
    ///
    /// The provider orders features by relevance; callers rely on that order.
    async fn forward_search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<PlaceFeature>, ApplicationError>;
}
