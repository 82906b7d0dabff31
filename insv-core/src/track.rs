//! Track building: deduplication and time reconstruction
//!
//! The metadata only gives a fix count and a total clip duration, so fixes
//! are assumed to be sampled uniformly across the clip. Runs of fixes at the
//! same position collapse into their first fix. A point's offset is the time
//! accumulated *before* its own slice, i.e. `position_in_stream * unit`, so
//! the first point always sits at the clip start.

use crate::error::ConvertError;
use crate::model::{Bounds, GpsFix, TelemetryDocument, Track, TrackPoint};
use chrono::TimeDelta;

/// Time between two consecutive fixes: `clip / count`
pub fn unit_duration(clip: TimeDelta, count: usize) -> Result<TimeDelta, ConvertError> {
    if count == 0 {
        return Err(ConvertError::NoFixes);
    }
    let count = i32::try_from(count).map_err(|_| {
        ConvertError::InvalidDuration(format!("{clip} cannot be split into {count} slices"))
    })?;
    Ok(clip / count)
}

/// Consume a parsed document and produce the deduplicated track
pub fn build_track(doc: TelemetryDocument) -> Result<Track, ConvertError> {
    let start = doc.start_time.ok_or(ConvertError::MissingStartTime)?;
    let clip = doc.clip_duration.ok_or(ConvertError::MissingDuration)?;
    let unit = unit_duration(clip, doc.fixes.len())?;

    let mut points = Vec::new();
    let mut current: Option<GpsFix> = None;
    let mut accumulated = TimeDelta::zero();

    for (index, mut fix) in doc.fixes {
        let starts_segment = current
            .as_ref()
            .map_or(true, |current| !current.same_position(&fix));

        // Skipped duplicates are never finalized
        if starts_segment {
            let (latitude, longitude, altitude) = complete(index, &fix)?;
            fix.offset = accumulated;
            let time = start
                .checked_add_signed(accumulated)
                .ok_or(ConvertError::TimestampOverflow(accumulated))?;

            points.push(TrackPoint {
                latitude,
                longitude,
                altitude,
                offset: accumulated,
                time,
            });
            current = Some(fix);
        }

        accumulated = accumulated
            .checked_add(&unit)
            .ok_or(ConvertError::TimestampOverflow(accumulated))?;
    }

    let bounds = Bounds::from_points(&points).ok_or(ConvertError::NoFixes)?;
    Ok(Track { points, bounds })
}

/// A fix must carry latitude, longitude and altitude to become a point
fn complete(index: u32, fix: &GpsFix) -> Result<(f64, f64, f64), ConvertError> {
    let missing = |field| ConvertError::IncompleteFix { index, field };
    Ok((
        fix.latitude.ok_or_else(|| missing("latitude"))?,
        fix.longitude.ok_or_else(|| missing("longitude"))?,
        fix.altitude.ok_or_else(|| missing("altitude"))?,
    ))
}
