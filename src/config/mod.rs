//! TOML configuration.
//!
//! Every field has a default, so a missing or empty file still yields a
//! working setup. CLI flags are applied on top of what is loaded here.

mod structs;

pub use structs::{FileConfig, GeneralConfig, TerminalConfig};

use crate::level::{LevelError, Rank, normalize};
use crate::setup::SetupOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "logsetup.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
}

impl Config {
    /// Loads from the platform config directory.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Read or parse failures.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/logsetup/logsetup.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "logsetup")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// The normalized `general.level`.
    ///
    /// # Errors
    /// `general.level` is not an integer or a known level name.
    pub fn level(&self) -> Result<Rank, LevelError> {
        normalize(&self.general.level)
    }

    /// Setup options described by this file alone.
    ///
    /// # Errors
    /// `general.level` is not an integer or a known level name.
    pub fn to_options(&self) -> Result<SetupOptions, crate::Error> {
        Ok(self.options_with_level(self.level()?))
    }

    /// Everything but the level comes from this file.
    #[must_use]
    pub fn options_with_level(&self, level: Rank) -> SetupOptions {
        SetupOptions::new()
            .level(level)
            .console(self.terminal.enabled)
            .colors(self.terminal.colors)
            .file(self.file.enabled)
            .path_prefix(self.file.path_prefix.as_str())
            .format(self.general.format.as_str())
            .timestamp_format(self.general.timestamp_format.as_str())
    }
}
