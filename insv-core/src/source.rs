//! Metadata source trait definition

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::Path;

/// Captured output of a metadata tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOutput {
    /// Tool output in the key/value line format the parser reads
    pub stdout: String,

    /// Diagnostic stream
    pub stderr: String,

    /// Process exit code, `None` when there was no process or it was killed
    pub exit_code: Option<i32>,
}

impl MetadataOutput {
    /// Output that did not come from a process (e.g. a saved dump)
    pub fn from_text(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Default::default()
        }
    }

    /// Whether the tool complained: non-blank stderr or a non-zero exit code
    pub fn has_diagnostics(&self) -> bool {
        !self.stderr.trim().is_empty() || self.exit_code.is_some_and(|code| code != 0)
    }

    /// Apply `policy` to any diagnostics this run produced
    ///
    /// With [`DiagnosticsPolicy::Log`] the caller is expected to report the
    /// diagnostics and carry on with whatever stdout holds.
    pub fn check(&self, policy: DiagnosticsPolicy) -> Result<()> {
        if policy == DiagnosticsPolicy::Fatal && self.has_diagnostics() {
            bail!(
                "metadata tool reported errors (exit code {:?}): {}",
                self.exit_code,
                self.stderr.trim()
            );
        }
        Ok(())
    }
}

/// What to do when the metadata tool writes to stderr or exits non-zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsPolicy {
    /// Report and keep going with the produced output
    #[default]
    Log,
    /// Abort the conversion
    Fatal,
}

/// Trait for metadata sources
///
/// A source turns a video path into the textual metadata dump the telemetry
/// parser consumes. The only suspension point of a conversion is awaiting
/// this future.
pub trait MetadataSource {
    /// Get the name of this source (e.g., "exiftool")
    fn name(&self) -> &str;

    /// Produce the metadata dump for `video`
    ///
    /// Returns `Err(_)` only when no output could be obtained at all.
    /// Tool-level failures are reported through [`MetadataOutput`].
    fn fetch(&self, video: &Path) -> impl Future<Output = Result<MetadataOutput>> + Send;
}
