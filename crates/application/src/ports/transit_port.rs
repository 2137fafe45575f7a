//! Transit stop listing port
//!
//! Defines the two stop-listing shapes the resolver needs: a provider-side
//! distance-sorted query and an unfiltered page fetch for the client-side
//! fallback scan.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Provider-defined tri-state wheelchair boarding indicator
///
/// Wire codes: 0 = no info, 1 = accessible, 2 = not accessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelchairBoarding {
    /// No accessibility information available
    NoInfo,
    /// Stop is wheelchair accessible
    Accessible,
    /// Stop is not wheelchair accessible
    NotAccessible,
}

impl WheelchairBoarding {
    /// Map a provider status code to the enum; unknown codes mean no info
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Accessible,
            2 => Self::NotAccessible,
            _ => Self::NoInfo,
        }
    }

    /// True only for an explicit accessible marking
    #[must_use]
    pub const fn is_accessible(self) -> bool {
        matches!(self, Self::Accessible)
    }
}

impl Default for WheelchairBoarding {
    fn default() -> Self {
        Self::NoInfo
    }
}

/// A transit stop as returned by the provider, read-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    /// Human-readable stop name
    pub name: String,
    /// Latitude, when the provider populated it
    pub latitude: Option<f64>,
    /// Longitude, when the provider populated it
    pub longitude: Option<f64>,
    /// Wheelchair boarding status
    #[serde(default)]
    pub wheelchair_boarding: WheelchairBoarding,
}

impl StopRecord {
    /// The stop's coordinate, when both components are populated and valid
    #[must_use]
    pub fn location(&self) -> Option<GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon).ok(),
            _ => None,
        }
    }
}

/// Port for transit stop listings
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// List stops sorted by distance from `location`, nearest first
    ///
    /// Delegates distance ranking to the provider's spatial index.
    async fn stops_by_distance(
        &self,
        location: &GeoLocation,
        limit: u8,
    ) -> Result<Vec<StopRecord>, ApplicationError>;

    /// Fetch up to `limit` stops with no spatial filter
    ///
    /// Used by the fallback scan when the spatial query comes back empty.
    async fn stop_page(&self, limit: u32) -> Result<Vec<StopRecord>, ApplicationError>;
}
