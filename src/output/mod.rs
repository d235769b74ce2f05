//! Sinks. The console and dated-file sinks cover setup; the `Output` trait
//! lets embedders attach their own.

mod file;
mod terminal;

pub use file::{FileOutput, dated_path};
pub use terminal::{ColorMode, TerminalOutput};

use crate::level::Rank;
use chrono::{DateTime, Local};

/// Everything a sink needs to render one line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub rank: Rank,
    /// Resolved through the logger's registry, so custom ranks show their registered name.
    pub level_name: String,
    /// Function that issued the call.
    pub caller: String,
    /// Module path of the call site.
    pub target: String,
    pub message: String,
    /// Taken once so every sink renders the same instant.
    pub timestamp: DateTime<Local>,
}

/// `Send + Sync` so the root logger can live in a static.
pub trait Output: Send + Sync {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error>;
}
