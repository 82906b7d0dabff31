//! Output sink for the finished GPX document

use anyhow::{Context, Result};
use insv_core::gpx::gpx_path;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `<output_dir>/<input-basename>.gpx`
///
/// Only complete documents reach the sink, so a failed conversion never
/// creates a file. A file left by an earlier run is not removed when a later
/// run fails.
#[derive(Debug, Clone)]
pub struct GpxFileSink {
    output_dir: PathBuf,
}

impl GpxFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Destination for a given input video
    pub fn target(&self, input: &Path) -> PathBuf {
        gpx_path(input, &self.output_dir)
    }

    pub fn write(&self, input: &Path, gpx: &str) -> Result<PathBuf> {
        let path = self.target(input);
        std::fs::write(&path, gpx)
            .with_context(|| format!("Failed to write GPX file: {}", path.display()))?;
        info!("Wrote {} ({} bytes)", path.display(), gpx.len());
        Ok(path)
    }
}
