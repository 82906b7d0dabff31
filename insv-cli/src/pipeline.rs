//! Conversion pipeline
//!
//! metadata source → telemetry parser → track builder → GPX writer → sink

use crate::config::Config;
use crate::sinks::GpxFileSink;
use anyhow::{Context, Result};
use insv_core::gpx::write_gpx;
use insv_core::source::{DiagnosticsPolicy, MetadataSource};
use insv_core::{build_track, parse_telemetry};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fetch the metadata dump for `video` and apply the diagnostics policy
pub async fn fetch_metadata<S: MetadataSource>(
    source: &S,
    video: &Path,
    policy: DiagnosticsPolicy,
) -> Result<String> {
    let output = source.fetch(video).await?;

    if output.has_diagnostics() {
        warn!(
            "Error running {} (exit code {:?}):\n{}",
            source.name(),
            output.exit_code,
            output.stderr.trim_end()
        );
    }
    output.check(policy)?;

    Ok(output.stdout)
}

/// Turn a metadata dump into a GPX document
pub fn convert(text: &str, creator: &str) -> Result<String> {
    let doc = parse_telemetry(text).context("Failed to parse telemetry")?;
    debug!("Parsed telemetry: {}", doc.summary());

    let fix_count = doc.fixes.len();
    let track = build_track(doc).context("Failed to build track")?;
    info!(
        "Built track with {} points from {} GPS fixes",
        track.points.len(),
        fix_count
    );

    Ok(write_gpx(&track, creator))
}

/// Run one full conversion and return the written file's path
pub async fn run<S: MetadataSource>(
    source: &S,
    video: &Path,
    sink: &GpxFileSink,
    config: &Config,
) -> Result<PathBuf> {
    let text = fetch_metadata(source, video, config.diagnostics).await?;
    let gpx = convert(&text, &config.creator)?;
    sink.write(video, &gpx)
}
