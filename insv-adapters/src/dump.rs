//! Saved metadata dump source
//!
//! Reads exiftool output captured earlier (e.g. with
//! `exiftool -m -ee -api largefilesupport -G4 -j clip.insv > meta.json`)
//! instead of running the tool again. Handy for large clips, where
//! extraction takes minutes.

use anyhow::{Context, Result};
use insv_core::source::{MetadataOutput, MetadataSource};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serves a previously captured metadata dump
#[derive(Debug, Clone)]
pub struct DumpFileSource {
    path: PathBuf,
}

impl DumpFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetadataSource for DumpFileSource {
    fn name(&self) -> &str {
        "dump"
    }

    async fn fetch(&self, video: &Path) -> Result<MetadataOutput> {
        info!(
            "Reading saved metadata for {} from {}",
            video.display(),
            self.path.display()
        );

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read metadata dump: {}", self.path.display()))?;

        Ok(MetadataOutput::from_text(text))
    }
}
