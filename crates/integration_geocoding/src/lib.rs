//! Mapbox geocoding integration
//!
//! Implements the application's [`GeocodingPort`](application::ports::GeocodingPort)
//! against the [Mapbox Search Box](https://docs.mapbox.com/api/search/search-box/)
//! forward endpoint. One `forward_search` call is one upstream round trip;
//! the progressive-relaxation retry ladder lives in the application layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{MapboxConfig, MapboxGeocodingClient};
//!
//! let config = MapboxConfig::new("pk.my-access-token");
//! let client = MapboxGeocodingClient::new(&config)?;
//! let features = client.forward("Boston Common", 1).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::MapboxGeocodingClient;
pub use config::MapboxConfig;
pub use error::GeocodingError;
