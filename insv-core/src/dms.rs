//! Degrees-minutes-seconds coordinate conversion
//!
//! exiftool prints GPS coordinates as `61 deg 29' 30.12" N`. In its JSON
//! output the inner quote arrives escaped (`30.12\" N`).

use crate::error::ConvertError;
use regex::Regex;
use std::sync::LazyLock;

static DMS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?<deg>\d+)\s+deg\s+(?<min>\d+)'\s+(?<sec>[\d.]+)"\s+(?<dir>[NSEW])"#)
        .expect("DMS pattern is valid")
});

/// Convert a DMS string to signed decimal degrees
///
/// South and west are negative. Anything that does not match the expected
/// layout is rejected rather than defaulted.
pub fn parse_dms(text: &str) -> Result<f64, ConvertError> {
    let unescaped = text.replace("\\\"", "\"");
    let invalid = || ConvertError::InvalidCoordinate(text.to_string());

    let caps = DMS_PATTERN.captures(&unescaped).ok_or_else(invalid)?;

    let degrees: f64 = caps["deg"].parse().map_err(|_| invalid())?;
    let minutes: f64 = caps["min"].parse().map_err(|_| invalid())?;
    let seconds: f64 = caps["sec"].parse().map_err(|_| invalid())?;

    let value = degrees + minutes / 60.0 + seconds / 3600.0;

    match &caps["dir"] {
        "S" | "W" => Ok(-value),
        _ => Ok(value),
    }
}
