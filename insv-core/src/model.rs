//! Telemetry and track data model
//!
//! `GpsFix` and `TelemetryDocument` are the parser's mutable accumulators.
//! `Track` and `TrackPoint` are the builder's finalized output, where every
//! field is present.
//!
//! Coordinates are WGS84 decimal degrees (south and west negative), altitude
//! is in meters.

use chrono::{NaiveDateTime, TimeDelta};
use std::collections::HashMap;

/// One GPS sample, filled in line by line as the parser meets its fields
#[derive(Debug, Clone, PartialEq)]
pub struct GpsFix {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub altitude: Option<f64>,

    /// Time since track start. The track builder only records it on fixes
    /// that start a new point; skipped duplicates keep zero.
    pub offset: TimeDelta,
}

impl Default for GpsFix {
    fn default() -> Self {
        Self {
            longitude: None,
            latitude: None,
            altitude: None,
            offset: TimeDelta::zero(),
        }
    }
}

impl GpsFix {
    /// Same position as `other`, ignoring altitude
    pub fn same_position(&self, other: &GpsFix) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }
}

/// Frame index to fix mapping that iterates in first-seen order
#[derive(Debug, Clone, Default)]
pub struct FixMap {
    fixes: Vec<(u32, GpsFix)>,
    index: HashMap<u32, usize>,
}

impl FixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix for `frame`, created empty on first access
    pub fn entry(&mut self, frame: u32) -> &mut GpsFix {
        let slot = match self.index.get(&frame) {
            Some(&slot) => slot,
            None => {
                self.fixes.push((frame, GpsFix::default()));
                let slot = self.fixes.len() - 1;
                self.index.insert(frame, slot);
                slot
            }
        };
        &mut self.fixes[slot].1
    }

    pub fn get(&self, frame: u32) -> Option<&GpsFix> {
        self.index.get(&frame).map(|&slot| &self.fixes[slot].1)
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &GpsFix)> {
        self.fixes.iter().map(|(frame, fix)| (*frame, fix))
    }
}

impl IntoIterator for FixMap {
    type Item = (u32, GpsFix);
    type IntoIter = std::vec::IntoIter<(u32, GpsFix)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixes.into_iter()
    }
}

impl FromIterator<(u32, GpsFix)> for FixMap {
    fn from_iter<I: IntoIterator<Item = (u32, GpsFix)>>(iter: I) -> Self {
        let mut map = FixMap::new();
        for (frame, fix) in iter {
            *map.entry(frame) = fix;
        }
        map
    }
}

/// Everything the parser extracted from one metadata dump
#[derive(Debug, Clone, Default)]
pub struct TelemetryDocument {
    /// Clip start (`CreateDate`), no timezone
    pub start_time: Option<NaiveDateTime>,

    /// Total clip length (`Duration`)
    pub clip_duration: Option<TimeDelta>,

    pub fixes: FixMap,
}

impl TelemetryDocument {
    /// One-line description used for debug logging
    pub fn summary(&self) -> String {
        format!(
            "start_time={} clip_duration={} fixes={}",
            self.start_time
                .map(|t| t.to_string())
                .unwrap_or_else(|| "none".to_string()),
            self.clip_duration
                .map(|d| d.to_string())
                .unwrap_or_else(|| "none".to_string()),
            self.fixes.len()
        )
    }
}

/// A finalized, timestamped track point
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,

    /// Time since track start
    pub offset: TimeDelta,

    /// Absolute time (start time + offset)
    pub time: NaiveDateTime,
}

/// Bounding box of a track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Box around the given points, `None` when there are none
    pub fn from_points(points: &[TrackPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds {
            min_lat: first.latitude,
            min_lon: first.longitude,
            max_lat: first.latitude,
            max_lon: first.longitude,
        };

        Some(points.iter().skip(1).fold(init, |b, p| Bounds {
            min_lat: b.min_lat.min(p.latitude),
            min_lon: b.min_lon.min(p.longitude),
            max_lat: b.max_lat.max(p.latitude),
            max_lon: b.max_lon.max(p.longitude),
        }))
    }
}

/// Deduplicated track ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub points: Vec<TrackPoint>,
    pub bounds: Bounds,
}
