//! Raw MBTA API response types
//!
//! The MBTA v3 API speaks JSON:API: stop records arrive as resources with
//! an `attributes` object. These deserialize targets convert into the
//! application's [`StopRecord`] port model.

use application::ports::{StopRecord, WheelchairBoarding};
use serde::Deserialize;

/// Top-level `GET /stops` response
#[derive(Debug, Deserialize)]
pub(crate) struct StopsResponse {
    #[serde(default)]
    pub data: Vec<RawStop>,
}

/// A single stop resource
#[derive(Debug, Deserialize)]
pub(crate) struct RawStop {
    #[serde(default)]
    pub attributes: RawStopAttributes,
}

/// Stop attributes; every field may be absent on the wire
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawStopAttributes {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wheelchair_boarding: Option<u8>,
}

impl RawStop {
    /// Convert into the port model
    ///
    /// An absent `wheelchair_boarding` means code 0, "no information",
    /// which resolves to not-accessible downstream.
    pub(crate) fn into_stop_record(self) -> StopRecord {
        StopRecord {
            name: self.attributes.name.unwrap_or_default(),
            latitude: self.attributes.latitude,
            longitude: self.attributes.longitude,
            wheelchair_boarding: WheelchairBoarding::from_code(
                self.attributes.wheelchair_boarding.unwrap_or(0),
            ),
        }
    }
}
