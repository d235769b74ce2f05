//! Severity levels that gate which records reach the sinks.
//!
//! Levels are a closed set with fixed numeric ranks. The rank is what the
//! logger compares against its threshold, so a threshold of 17 is legal even
//! though no named level sits there.

mod input;

pub use input::{LevelError, LevelInput, normalize, normalize_str};

use std::fmt;
use std::str::FromStr;

/// Numeric severity. Higher is more severe.
pub type Rank = i32;

/// Derives `Ord` so levels sort by severity; the discriminant is the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Below debug, for output that would drown everything else.
    Spam = 5,
    Debug = 10,
    #[default]
    Info = 20,
    Warning = 30,
    /// Between warning and error, for positive milestones that must stay visible.
    Success = 35,
    Error = 40,
    Critical = 50,
}

impl Level {
    #[must_use]
    pub const fn rank(self) -> Rank {
        self as Rank
    }

    /// Upper-case name as rendered in the `{level}` column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spam => "SPAM",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Lowercase because CLI args and config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Used by help output, the level styles table, and tests.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Spam,
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Success,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl From<Level> for Rank {
    fn from(level: Level) -> Self {
        level.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match on the seven level names; no aliases. The level
/// normalizer maps this onto `LevelError::InvalidName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|level| level.as_str() == lower)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Maps `log` crate levels onto ranks so third-party records share the same threshold.
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Self::Spam,
            log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warning,
            log::Level::Error => Self::Error,
        }
    }
}

/// Nearest `log` filter that lets every record at or above `rank` through.
#[must_use]
pub const fn level_filter(rank: Rank) -> log::LevelFilter {
    if rank <= Level::Spam.rank() {
        log::LevelFilter::Trace
    } else if rank <= Level::Debug.rank() {
        log::LevelFilter::Debug
    } else if rank <= Level::Info.rank() {
        log::LevelFilter::Info
    } else if rank <= Level::Warning.rank() {
        log::LevelFilter::Warn
    } else if rank <= Level::Error.rank() {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Off
    }
}
