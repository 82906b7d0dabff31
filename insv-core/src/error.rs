//! Error types for telemetry conversion

use thiserror::Error;

/// Fatal conditions raised while parsing telemetry or building a track
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid altitude: {0}")]
    InvalidAltitude(String),

    #[error("invalid frame index in key: {0}")]
    InvalidFrameIndex(String),

    #[error("telemetry has no CreateDate")]
    MissingStartTime,

    #[error("telemetry has no Duration")]
    MissingDuration,

    #[error("telemetry contains no GPS fixes")]
    NoFixes,

    /// A frame had some GPS lines but never received all of lat/lon/alt
    #[error("GPS fix for frame {index} is missing its {field}")]
    IncompleteFix { index: u32, field: &'static str },

    #[error("timestamp out of range at offset {0}")]
    TimestampOverflow(chrono::TimeDelta),
}
