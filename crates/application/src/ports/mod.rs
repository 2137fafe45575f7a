//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! upstream providers. The integration crates implement these ports.

mod geocoding_port;
mod transit_port;

pub use geocoding_port::{GeocodingPort, PlaceFeature};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use transit_port::{StopRecord, TransitPort, WheelchairBoarding};
#[cfg(test)]
pub use transit_port::MockTransitPort;
