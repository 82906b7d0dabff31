//! End-to-end tests: metadata text in, GPX text out

use chrono::{NaiveDate, TimeDelta};
use insv_core::gpx::write_gpx;
use insv_core::{build_track, parse_telemetry, ConvertError};

const TWO_IDENTICAL_FRAMES: &str = r#"[QuickTime]      "CreateDate"                    : "2023:05:01 10:00:00"
[QuickTime]      "Duration"                      : "0:00:02"
[Copy1]          "GPSLatitude"                   : "10 deg 0' 0.00\" N"
[Copy1]          "GPSLongitude"                  : "20 deg 0' 0.00\" E"
[Copy1]          "GPSAltitude"                   : "5.0 m"
[Copy2]          "GPSLatitude"                   : "10 deg 0' 0.00\" N"
[Copy2]          "GPSLongitude"                  : "20 deg 0' 0.00\" E"
[Copy2]          "GPSAltitude"                   : "5.0 m"
"#;

/// Shape of `exiftool -m -ee -api largefilesupport -G4 -j` output
const EXIFTOOL_JSON: &str = r#"[{
  "SourceFile": "VID_20230501_100000_00_001.insv",
  ":ExifToolVersion": 13.33,
  ":FileName": "VID_20230501_100000_00_001.insv",
  ":CreateDate": "2023:05:01 10:00:00",
  ":Duration": "0:00:08",
  "Copy1:GPSLatitude": "61 deg 29' 30.12\" N",
  "Copy1:GPSLongitude": "23 deg 45' 0.00\" E",
  "Copy1:GPSAltitude": "110.5 m",
  "Copy2:GPSLatitude": "61 deg 29' 30.12\" N",
  "Copy2:GPSLongitude": "23 deg 45' 0.00\" E",
  "Copy2:GPSAltitude": "110.7 m",
  "Copy3:GPSLatitude": "61 deg 29' 31.00\" N",
  "Copy3:GPSLongitude": "23 deg 45' 1.00\" E",
  "Copy3:GPSAltitude": "111 m",
  "Copy4:GPSLatitude": "61 deg 29' 31.00\" N",
  "Copy4:GPSLongitude": "23 deg 45' 1.00\" E",
  "Copy4:GPSAltitude": "111 m",
  "Copy5:GPSLatitude": "61 deg 29' 32.00\" N",
  "Copy5:GPSLongitude": "23 deg 45' 2.00\" E",
  "Copy5:GPSAltitude": "112 m",
  "Copy6:GPSLatitude": "61 deg 29' 32.00\" N",
  "Copy6:GPSLongitude": "23 deg 45' 2.00\" E",
  "Copy6:GPSAltitude": "112 m",
  "Copy7:GPSLatitude": "61 deg 29' 32.00\" N",
  "Copy7:GPSLongitude": "23 deg 45' 2.00\" E",
  "Copy7:GPSAltitude": "112 m",
  "Copy8:GPSLatitude": "0 deg 0' 1.00\" S",
  "Copy8:GPSLongitude": "0 deg 0' 1.00\" W",
  "Copy8:GPSAltitude": "0 m"
}]
"#;

#[test]
fn test_identical_frames_collapse_to_one_point() {
    let doc = parse_telemetry(TWO_IDENTICAL_FRAMES).expect("dump should parse");
    let track = build_track(doc).expect("track should build");

    assert_eq!(track.points.len(), 1);
    let point = &track.points[0];
    assert_eq!(point.latitude, 10.0);
    assert_eq!(point.longitude, 20.0);
    assert_eq!(point.altitude, 5.0);
    assert_eq!(
        point.time,
        NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );

    let gpx = write_gpx(&track, "insv2gpx");
    assert!(gpx.contains(r#"<trkpt lat="10" lon="20">"#));
    assert!(gpx.contains("<ele>5</ele>"));
    assert!(gpx.contains("<time>2023-05-01T10:00:00Z</time>"));
    assert!(gpx.contains(r#"<bounds minlat="10" minlon="20" maxlon="20" maxlat="10"/>"#));
}

#[test]
fn test_exiftool_json_dump() {
    let doc = parse_telemetry(EXIFTOOL_JSON).expect("dump should parse");
    assert_eq!(doc.fixes.len(), 8);

    let track = build_track(doc).expect("track should build");
    assert_eq!(track.points.len(), 4);

    let seconds: Vec<i64> = track.points.iter().map(|p| p.offset.num_seconds()).collect();
    assert_eq!(seconds, vec![0, 2, 4, 7]);

    // First of each run keeps its own altitude
    assert_eq!(track.points[0].altitude, 110.5);

    let last = track.points.last().unwrap();
    assert!(last.latitude < 0.0);
    assert!(last.longitude < 0.0);
    assert_eq!(
        last.time,
        NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 7)
            .unwrap()
    );

    assert!(track.bounds.min_lat < 0.0);
    assert_eq!(track.bounds.max_lat, 61.0 + 29.0 / 60.0 + 32.0 / 3600.0);

    let gpx = write_gpx(&track, "insv2gpx");
    assert_eq!(gpx.matches("<trkpt ").count(), 4);
    assert!(gpx.ends_with("</gpx>\n"));
}

#[test]
fn test_uneven_unit_duration() {
    let text = r#"
  ":CreateDate": "2023:05:01 10:00:00",
  ":Duration": "0:00:01",
  "Copy1:GPSLatitude": "1 deg 0' 0.00\" N",
  "Copy1:GPSLongitude": "1 deg 0' 0.00\" E",
  "Copy1:GPSAltitude": "1 m",
  "Copy2:GPSLatitude": "2 deg 0' 0.00\" N",
  "Copy2:GPSLongitude": "2 deg 0' 0.00\" E",
  "Copy2:GPSAltitude": "1 m",
  "Copy3:GPSLatitude": "3 deg 0' 0.00\" N",
  "Copy3:GPSLongitude": "3 deg 0' 0.00\" E",
  "Copy3:GPSAltitude": "1 m",
"#;
    let track = build_track(parse_telemetry(text).unwrap()).unwrap();
    let offsets: Vec<TimeDelta> = track.points.iter().map(|p| p.offset).collect();
    assert_eq!(
        offsets,
        vec![
            TimeDelta::zero(),
            TimeDelta::nanoseconds(333_333_333),
            TimeDelta::nanoseconds(666_666_666),
        ]
    );
}

#[test]
fn test_missing_header_fields_fail_before_building() {
    let no_date = r#"
  ":Duration": "0:00:01",
  "Copy1:GPSLatitude": "1 deg 0' 0.00\" N",
  "Copy1:GPSLongitude": "1 deg 0' 0.00\" E",
  "Copy1:GPSAltitude": "1 m",
"#;
    let doc = parse_telemetry(no_date).unwrap();
    assert_eq!(build_track(doc).unwrap_err(), ConvertError::MissingStartTime);

    let no_duration = r#"
  ":CreateDate": "2023:05:01 10:00:00",
  "Copy1:GPSLatitude": "1 deg 0' 0.00\" N",
  "Copy1:GPSLongitude": "1 deg 0' 0.00\" E",
  "Copy1:GPSAltitude": "1 m",
"#;
    let doc = parse_telemetry(no_duration).unwrap();
    assert_eq!(build_track(doc).unwrap_err(), ConvertError::MissingDuration);
}

#[test]
fn test_no_gps_frames() {
    let text = r#"
  ":CreateDate": "2023:05:01 10:00:00",
  ":Duration": "0:00:01",
"#;
    let doc = parse_telemetry(text).unwrap();
    assert_eq!(build_track(doc).unwrap_err(), ConvertError::NoFixes);
}

#[test]
fn test_duplicate_frame_without_altitude_is_dropped() {
    let dump = r#"[QuickTime]      "CreateDate"                    : "2023:05:01 10:00:00"
[QuickTime]      "Duration"                      : "0:00:02"
[Copy1]          "GPSLatitude"                   : "10 deg 0' 0.00\" N"
[Copy1]          "GPSLongitude"                  : "20 deg 0' 0.00\" E"
[Copy1]          "GPSAltitude"                   : "5.0 m"
[Copy2]          "GPSLatitude"                   : "10 deg 0' 0.00\" N"
[Copy2]          "GPSLongitude"                  : "20 deg 0' 0.00\" E"
"#;
    let doc = parse_telemetry(dump).expect("dump should parse");
    let track = build_track(doc).expect("skipped duplicate needs no altitude");

    assert_eq!(track.points.len(), 1);
    assert_eq!(track.points[0].altitude, 5.0);
}
