//! MBTA transit integration
//!
//! Implements the application's [`TransitPort`](application::ports::TransitPort)
//! against the [MBTA v3 API](https://api-v3.mbta.com/docs/swagger/index.html)
//! `GET /stops` endpoint, in its two shapes: a distance-sorted spatial query
//! and an unfiltered page fetch. Tier selection between the two lives in the
//! application layer.

mod client;
mod config;
mod error;
mod models;

pub use client::MbtaTransitClient;
pub use config::MbtaConfig;
pub use error::TransitError;
