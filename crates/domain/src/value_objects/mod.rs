//! Value objects

mod geo_location;

pub use geo_location::{GeoLocation, InvalidCoordinates};
