//! Configuration struct definitions.

use crate::fmt::{DEFAULT_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use crate::level::{Level, LevelInput};
use crate::output::ColorMode;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level, integer or level name.
    pub level: LevelInput,
    /// Line template shared by every sink.
    pub format: String,
    /// strftime pattern for `{timestamp}`.
    pub timestamp_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: LevelInput::from(Level::Info),
            format: DEFAULT_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable console output.
    pub enabled: bool,
    /// auto, always, never.
    pub colors: ColorMode,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: ColorMode::Auto,
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Enable the dated file sink.
    pub enabled: bool,
    /// Prepended to `YYYYMMDD.log`; `~` is expanded.
    pub path_prefix: String,
}
