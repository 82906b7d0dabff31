//! insv2gpx Core Library
//!
//! This crate turns the textual metadata dump of an `.insv` 360° video into
//! a deduplicated, timestamped GPS track and serializes it as GPX 1.1.

pub mod dms;
pub mod error;
pub mod gpx;
pub mod model;
pub mod source;
pub mod telemetry;
pub mod track;

pub use error::ConvertError;
pub use model::{Bounds, GpsFix, TelemetryDocument, Track, TrackPoint};
pub use source::{DiagnosticsPolicy, MetadataOutput, MetadataSource};
pub use telemetry::parse_telemetry;
pub use track::build_track;
