#![forbid(unsafe_code)]

//! `logsetup` - process-wide logging setup.
//!
//! - Custom `SPAM` (5) and `SUCCESS` (35) levels beside the standard ones
//! - Console sink on stderr, colorized, plus an optional dated file sink
//! - One line format for every sink:
//!   `timestamp :: LEVEL(8-wide) :: callerFunction(17-wide) - message`
//! - Level arguments accepted as integers or case-insensitive names
//!
//! # Example
//!
//! ```no_run
//! use logsetup::{Level, SetupOptions, setup};
//!
//! let options = SetupOptions::new().level(Level::Info).file(true);
//! setup::configure(&options).unwrap();
//!
//! logsetup::log!(Level::Success, "ready");
//! log::info!("records from the log facade land in the same sinks");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `--log-level` / `--logToFile` argument surface and the binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;
pub mod registry;
pub mod root;
pub mod setup;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{DEFAULT_FORMAT, Formatter};
pub use level::{Level, LevelError, LevelInput, Rank, normalize, normalize_str};
pub use logger::{Logger, LoggerBuilder};
pub use output::{ColorMode, FileOutput, LogRecord, Output, TerminalOutput};
pub use registry::{LevelRegistry, RegistryError};
pub use setup::{SetupOptions, configure};

#[cfg(feature = "cli")]
pub use cli::LoggingArgs;
