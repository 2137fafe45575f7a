//! Application layer - Use cases and orchestration
//!
//! Contains the location-to-transit resolution pipeline and the autocomplete
//! suggestion formatter, plus the port definitions the integration crates
//! implement. All upstream calls go through ports so the decision logic is
//! testable without a network.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
