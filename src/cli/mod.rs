//! Command-line surface.
//!
//! [`LoggingArgs`] is meant to be flattened into other binaries' argument
//! structs; [`Cli`] is the `logsetup` binary's own parser.

use crate::config::Config;
use crate::level::normalize_str;
use crate::output::ColorMode;
use crate::setup::SetupOptions;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Logging flags shared by any binary that configures logging at startup.
#[derive(Debug, Clone, Default, Args)]
pub struct LoggingArgs {
    /// Minimum level: an integer or one of spam, debug, info, warning, success, error, critical
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Also write records to <prefix>YYYYMMDD.log
    #[arg(long = "logToFile", visible_alias = "log-to-file")]
    pub log_to_file: bool,

    /// Prefix for the log file name
    #[arg(long = "log-path", value_name = "PREFIX")]
    pub log_path: Option<String>,

    /// When to color console output
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable the console sink
    #[arg(long)]
    pub no_console: bool,
}

impl LoggingArgs {
    /// Validates the raw level and layers the flags over `config`.
    ///
    /// # Errors
    /// An invalid `--log-level`, or an invalid `general.level` when the flag
    /// is absent. A flag that is given shadows the config level entirely.
    pub fn resolve(&self, config: &Config) -> Result<SetupOptions, crate::Error> {
        let level = match self.log_level {
            Some(ref raw) => normalize_str(raw)?,
            None => config.level()?,
        };
        let mut options = config.options_with_level(level);

        if self.log_to_file {
            options.file = true;
        }
        if let Some(ref prefix) = self.log_path {
            options.path_prefix.clone_from(prefix);
        }
        if let Some(mode) = self.color {
            options.colors = mode;
        }
        if self.no_console {
            options.console = false;
        }

        Ok(options)
    }
}

/// logsetup - configure process logging and emit a record at every level.
#[derive(Debug, Parser)]
#[command(
    name = "logsetup",
    version,
    about = "Configure process logging and emit a record at every level"
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}
