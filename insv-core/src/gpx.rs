//! GPX 1.1 serialization

use crate::model::Track;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

/// Track point time layout. The source clock is written as-is with a literal
/// `Z`; no zone conversion happens.
pub const GPX_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a track as a GPX document
pub fn write_gpx(track: &Track, creator: &str) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns an error
    let _ = render(track, creator, &mut out);
    out
}

fn render(track: &Track, creator: &str, out: &mut String) -> fmt::Result {
    let b = &track.bounds;

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<gpx xmlns="http://www.topografix.com/GPX/1/1" creator="{}" version="1.1">"#,
        escape_xml(creator)
    )?;
    writeln!(out, "  <metadata>")?;
    writeln!(
        out,
        r#"    <bounds minlat="{}" minlon="{}" maxlon="{}" maxlat="{}"/>"#,
        b.min_lat, b.min_lon, b.max_lon, b.max_lat
    )?;
    writeln!(out, "  </metadata>")?;
    writeln!(out, "  <trk>")?;
    writeln!(out, "    <trkseg>")?;

    for point in &track.points {
        writeln!(
            out,
            r#"      <trkpt lat="{}" lon="{}">"#,
            point.latitude, point.longitude
        )?;
        writeln!(out, "        <ele>{}</ele>", point.altitude)?;
        writeln!(
            out,
            "        <time>{}</time>",
            point.time.format(GPX_TIME_FORMAT)
        )?;
        writeln!(out, "      </trkpt>")?;
    }

    writeln!(out, "    </trkseg>")?;
    writeln!(out, "  </trk>")?;
    writeln!(out, "</gpx>")
}

/// `<input-basename>.gpx` inside `output_dir`
pub fn gpx_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "track".to_string());
    output_dir.join(format!("{stem}.gpx"))
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
