//! HTTP presentation layer for the transit stop finder
//!
//! Thin I/O glue over the application pipeline: routing, request
//! validation, error-to-HTTP mapping, and environment configuration.
//! All decision logic lives in the `application` crate.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError, ServerConfig};
pub use error::ApiError;
pub use state::AppState;
