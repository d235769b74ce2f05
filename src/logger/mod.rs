//! The logger fans each record out to its sinks after a single rank check.
//! Built through [`LoggerBuilder`] so every sink shares one formatter.

mod builder;

pub use builder::{FileBuilder, LoggerBuilder, TerminalBuilder};

use crate::fmt::Formatter;
use crate::level::{Level, Rank};
use crate::output::{LogRecord, Output};
use crate::registry::LevelRegistry;
use chrono::Local;

/// Immutable after build, so it can sit in a static and be shared across threads.
pub struct Logger {
    min_level: Rank,
    outputs: Vec<Box<dyn Output>>,
    registry: LevelRegistry,
    formatter: Formatter,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// True if a record at `rank` would be emitted.
    #[must_use]
    pub fn enabled(&self, rank: impl Into<Rank>) -> bool {
        rank.into() >= self.min_level
    }

    /// Core dispatch: filters by rank, then writes to every sink.
    pub fn log(&self, level: impl Into<Rank>, caller: &str, msg: &str) {
        self.log_at(level.into(), caller, "", msg);
    }

    /// Like [`log`](Self::log) with the call site's module path, which the
    /// `{target}` placeholder renders.
    pub fn log_at(&self, rank: Rank, caller: &str, target: &str, msg: &str) {
        if rank < self.min_level {
            return;
        }

        let record = LogRecord {
            rank,
            level_name: self.registry.name_of(rank),
            caller: caller.to_string(),
            target: target.to_string(),
            message: msg.to_string(),
            timestamp: Local::now(),
        };

        for output in &self.outputs {
            // A broken sink must not take the others down with it.
            let _ = output.write(&record);
        }
    }

    /// Logs under a registered accessor name (`"spam"`, `"success"`, ...).
    /// Returns false when no level answers to `accessor`.
    pub fn log_named(&self, accessor: &str, caller: &str, msg: &str) -> bool {
        let Some(rank) = self.registry.accessor_rank(accessor) else {
            return false;
        };
        self.log_at(rank, caller, "", msg);
        true
    }

    pub fn spam(&self, caller: &str, msg: &str) {
        self.log(Level::Spam, caller, msg);
    }

    pub fn debug(&self, caller: &str, msg: &str) {
        self.log(Level::Debug, caller, msg);
    }

    pub fn info(&self, caller: &str, msg: &str) {
        self.log(Level::Info, caller, msg);
    }

    pub fn warning(&self, caller: &str, msg: &str) {
        self.log(Level::Warning, caller, msg);
    }

    pub fn success(&self, caller: &str, msg: &str) {
        self.log(Level::Success, caller, msg);
    }

    pub fn error(&self, caller: &str, msg: &str) {
        self.log(Level::Error, caller, msg);
    }

    pub fn critical(&self, caller: &str, msg: &str) {
        self.log(Level::Critical, caller, msg);
    }

    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Rank {
        self.min_level
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Template source every sink renders with.
    #[must_use]
    pub fn format(&self) -> &str {
        self.formatter.template().source()
    }

    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    #[must_use]
    pub const fn registry(&self) -> &LevelRegistry {
        &self.registry
    }
}

/// Records from the `log` facade carry no function name; the last segment of
/// the module path stands in for it.
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Level::from(metadata.level()).rank() >= self.min_level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !log::Log::enabled(self, record.metadata()) {
            return;
        }

        let target = record.module_path().unwrap_or_else(|| record.target());
        let caller = target.rsplit("::").next().unwrap_or(target);
        self.log_at(
            Level::from(record.level()).rank(),
            caller,
            target,
            &record.args().to_string(),
        );
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}
