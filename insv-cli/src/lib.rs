//! insv2gpx CLI Library
//!
//! Exposes the application pieces for integration testing.

pub mod config;
pub mod pipeline;
pub mod prompt;
pub mod sinks;
