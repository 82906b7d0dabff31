//! Application configuration
//!
//! Read from `<config dir>/insv2gpx/config.json` when that file exists, or
//! from the path in `INSV2GPX_CONFIG`. Every key is optional.

use anyhow::{Context, Result};
use insv_core::DiagnosticsPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "INSV2GPX_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// exiftool binary to run
    pub exiftool_path: PathBuf,

    /// Handling of exiftool stderr output / non-zero exit
    pub diagnostics: DiagnosticsPolicy,

    /// GPX `creator` attribute
    pub creator: String,

    /// Read exiftool output from this file instead of running it
    pub metadata_dump: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exiftool_path: PathBuf::from("exiftool"),
            diagnostics: DiagnosticsPolicy::Log,
            creator: "insv2gpx".to_string(),
            metadata_dump: None,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid config JSON")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Load the active configuration
    ///
    /// An explicit `INSV2GPX_CONFIG` path must exist. The default location is
    /// optional and falls back to built-in defaults.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("insv2gpx").join("config.json"))
}
