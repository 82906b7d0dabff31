//! exiftool subprocess source
//!
//! Runs exiftool once per conversion and captures both streams. There is no
//! timeout and no retry: the process either finishes or the conversion
//! fails.

use anyhow::{Context, Result};
use insv_core::source::{MetadataOutput, MetadataSource};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Arguments placed before the video path
///
/// `-ee` extracts the embedded per-frame telemetry, `-G4` prefixes each tag
/// with its `Copy<N>` group, and `-j` selects the one-tag-per-line JSON
/// layout.
pub const EXIFTOOL_ARGS: &[&str] = &["-m", "-ee", "-api", "largefilesupport", "-G4", "-j"];

/// Runs the exiftool binary on the video
#[derive(Debug, Clone)]
pub struct ExifToolSource {
    program: PathBuf,
}

impl ExifToolSource {
    /// Use `exiftool` from `PATH`
    pub fn new() -> Self {
        Self::with_program("exiftool")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ExifToolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for ExifToolSource {
    fn name(&self) -> &str {
        "exiftool"
    }

    async fn fetch(&self, video: &Path) -> Result<MetadataOutput> {
        info!("Running exiftool on {}", video.display());
        debug!("{} {:?} {}", self.program.display(), EXIFTOOL_ARGS, video.display());

        let output = Command::new(&self.program)
            .args(EXIFTOOL_ARGS)
            .arg(video)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        info!("exiftool done ({})", output.status);

        Ok(MetadataOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
