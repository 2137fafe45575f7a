//! Domain layer for the transit stop finder
//!
//! Contains core value objects shared by every other layer. This layer has
//! no I/O and no knowledge of any upstream provider.

pub mod value_objects;

pub use value_objects::*;
