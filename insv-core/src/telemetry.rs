//! Line-oriented parser for exiftool's metadata dump
//!
//! Two line layouts are understood. The JSON layout produced by
//! `exiftool -G4 -j` puts the group inside the quoted key:
//!
//! ```text
//!   ":CreateDate": "2023:05:01 10:00:00",
//!   "Copy1:GPSLatitude": "10 deg 0' 0.00\" N",
//! ```
//!
//! The bracketed layout keeps the group outside the quotes:
//!
//! ```text
//! [Copy1]          "GPSLatitude"                   : "10 deg 0' 0.00\" N"
//! ```
//!
//! Both are reduced to a `Group:Property` key and a bare value before the
//! key is matched.

use crate::dms::parse_dms;
use crate::error::ConvertError;
use crate::model::TelemetryDocument;
use chrono::{NaiveDateTime, TimeDelta};
use std::borrow::Cow;

/// Lines shorter than this cannot hold a key/value pair
pub const MIN_LINE_LEN: usize = 10;

/// `CreateDate` layout: fixed width, 24 hour, no timezone
pub const CREATE_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

const COPY_GROUP: &str = "Copy";

/// Parse a full metadata dump in one pass
///
/// `CreateDate` and `Duration` are taken from their first occurrence only.
/// GPS sub-fields of the same frame are merged into one fix.
pub fn parse_telemetry(text: &str) -> Result<TelemetryDocument, ConvertError> {
    let mut doc = TelemetryDocument::default();

    for line in text.lines() {
        if line.len() < MIN_LINE_LEN {
            continue;
        }

        let Some((key, value)) = split_line(line) else {
            continue;
        };

        let is_copy = key.starts_with(COPY_GROUP);

        if doc.start_time.is_none() && !is_copy && key.ends_with(":CreateDate") {
            doc.start_time = Some(parse_create_date(value)?);
        } else if doc.clip_duration.is_none() && !is_copy && key.ends_with(":Duration") {
            doc.clip_duration = Some(parse_duration(value)?);
        } else if is_copy {
            if key.ends_with(":GPSLongitude") {
                let lon = parse_dms(value)?;
                doc.fixes.entry(frame_index(&key)?).longitude = Some(lon);
            } else if key.ends_with(":GPSLatitude") {
                let lat = parse_dms(value)?;
                doc.fixes.entry(frame_index(&key)?).latitude = Some(lat);
            } else if key.ends_with(":GPSAltitude") {
                let alt = parse_altitude(value)?;
                doc.fixes.entry(frame_index(&key)?).altitude = Some(alt);
            }
        }
    }

    Ok(doc)
}

/// Split a raw line into its `Group:Property` key and unquoted value
///
/// Returns `None` for lines without a quoted key (braces, blank lines).
fn split_line(line: &str) -> Option<(Cow<'_, str>, &str)> {
    let trimmed = line.trim_start_matches(' ');
    let open = trimmed.find('"')?;
    let after_open = &trimmed[open + 1..];
    let close = after_open.find('"')?;
    let name = &after_open[..close];

    let group = trimmed[..open]
        .trim_end()
        .strip_prefix('[')
        .and_then(|g| g.strip_suffix(']'));

    let key = match group {
        Some(group) => Cow::Owned(format!("{group}:{name}")),
        None => Cow::Borrowed(name),
    };

    Some((key, extract_value(&after_open[close + 1..])))
}

fn extract_value(rest: &str) -> &str {
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
    rest.trim_end()
        .trim_end_matches(['"', ','])
        .trim_start_matches('"')
}

/// Frame number from a `Copy<N>:Property` key
fn frame_index(key: &str) -> Result<u32, ConvertError> {
    key.split_once(':')
        .and_then(|(group, _)| group.strip_prefix(COPY_GROUP))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| ConvertError::InvalidFrameIndex(key.to_string()))
}

fn parse_create_date(value: &str) -> Result<NaiveDateTime, ConvertError> {
    NaiveDateTime::parse_from_str(value, CREATE_DATE_FORMAT).map_err(|source| {
        ConvertError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// Parse exiftool's duration text
///
/// Accepts `H:MM:SS`, `H:MM:SS.fff` (optionally followed by a note such as
/// `(approx)`) and the short-clip form `12.34 s`.
pub fn parse_duration(value: &str) -> Result<TimeDelta, ConvertError> {
    let invalid = || ConvertError::InvalidDuration(value.to_string());
    let value = value.trim();

    if let Some(secs) = value.strip_suffix('s') {
        return parse_seconds(secs.trim()).ok_or_else(invalid);
    }

    let clock = value.split_whitespace().next().ok_or_else(invalid)?;
    let mut parts = clock.split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let hours: i64 = h.parse().map_err(|_| invalid())?;
    let minutes: i64 = m.parse().map_err(|_| invalid())?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    let seconds = parse_seconds(s).ok_or_else(invalid)?;
    if seconds >= TimeDelta::seconds(60) {
        return Err(invalid());
    }

    TimeDelta::try_hours(hours)
        .and_then(|d| d.checked_add(&TimeDelta::minutes(minutes)))
        .and_then(|d| d.checked_add(&seconds))
        .ok_or_else(invalid)
}

/// Exact decimal seconds (up to nanosecond precision), no float rounding
fn parse_seconds(text: &str) -> Option<TimeDelta> {
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let nanos: i64 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<9}").parse().ok()?
    };

    TimeDelta::try_seconds(whole)?.checked_add(&TimeDelta::nanoseconds(nanos))
}

/// Leading number of `<number> <unit>`, e.g. `5.0 m`
fn parse_altitude(value: &str) -> Result<f64, ConvertError> {
    let number = value.split(' ').next().unwrap_or(value);
    number
        .parse()
        .map_err(|_| ConvertError::InvalidAltitude(value.to_string()))
}
