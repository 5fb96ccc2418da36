//! Browser configuration.
//!
//! Settings load from a TOML file when one exists and fall back to defaults
//! otherwise, so the binary runs without any setup. CLI flags layered on top
//! by `main` override individual fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How copied code samples leave the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    /// Emit an OSC 52 sequence and let the terminal emulator own the paste
    /// buffer. Works over SSH; silently ignored by emulators without support.
    Osc52,
    /// Never copy. Every copy attempt surfaces the manual-copy notice.
    Off,
}

impl Default for ClipboardMode {
    fn default() -> Self {
        ClipboardMode::Osc52
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Lab shown on startup. Unknown ids fall back to the first catalog entry.
    #[serde(default)]
    pub default_lab: Option<String>,

    /// Where per-lab completion is persisted.
    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,

    /// JSON-lines log destination. Logging is off when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Runtime tick cadence in milliseconds. Drives copy-flash expiry.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub clipboard: ClipboardMode,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_lab: None,
            progress_file: default_progress_file(),
            log_file: None,
            tick_interval_ms: default_tick_interval(),
            clipboard: ClipboardMode::default(),
        }
    }
}

fn default_progress_file() -> PathBuf {
    PathBuf::from("labdeck-progress.json")
}

fn default_tick_interval() -> u64 {
    200
}

impl BrowserConfig {
    /// Loads the file at `path`, or returns defaults when it does not exist.
    /// A file that exists but fails to read or parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
