//! Raw Search Box API response types
//!
//! Deserialization targets for the Mapbox forward endpoint, converted into
//! the application's [`PlaceFeature`] port model. Geometry coordinates come
//! back longitude-first and are swapped during conversion.

use application::ports::PlaceFeature;
use domain::value_objects::GeoLocation;
use serde::Deserialize;

/// Top-level forward-search response
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

/// A single GeoJSON feature from the Search Box API
#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub properties: RawProperties,
}

/// GeoJSON point geometry, coordinates as [longitude, latitude]
#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawProperties {
    pub name: Option<String>,
    pub place_formatted: Option<String>,
    pub feature_type: Option<String>,
    pub context: Option<RawContext>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawContext {
    pub region: Option<RawContextEntry>,
    pub district: Option<RawContextEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawContextEntry {
    pub name: Option<String>,
}

impl RawFeature {
    /// Convert into the port model
    ///
    /// Malformed geometry drops the coordinate, not the feature: the
    /// suggestion path still needs the textual fields.
    pub(crate) fn into_place_feature(self) -> PlaceFeature {
        let location = self.geometry.and_then(|g| {
            // Longitude comes first on the wire
            match (g.coordinates.first(), g.coordinates.get(1)) {
                (Some(&lon), Some(&lat)) => GeoLocation::new(lat, lon).ok(),
                _ => None,
            }
        });

        let (region, district) = self.properties.context.map_or((None, None), |ctx| {
            (
                ctx.region.and_then(|r| r.name),
                ctx.district.and_then(|d| d.name),
            )
        });

        PlaceFeature {
            name: self.properties.name,
            place_formatted: self.properties.place_formatted,
            feature_type: self.properties.feature_type,
            region,
            district,
            location,
        }
    }
}
