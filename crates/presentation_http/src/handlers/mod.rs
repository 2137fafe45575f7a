//! HTTP request handlers

pub mod health;
pub mod stops;
pub mod suggestions;
