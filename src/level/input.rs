//! Turns whatever the user typed (or wrote in the config file) into a rank.

use super::{Level, Rank};
use serde::Deserialize;
use std::fmt;

/// Raw level value before validation. Untagged so TOML `level = 17`,
/// `level = "debug"` and `level = 1.5` all deserialize; only the first two are valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LevelInput {
    Int(i64),
    Text(String),
    Other(toml::Value),
}

impl From<&str> for LevelInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for LevelInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for LevelInput {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<Level> for LevelInput {
    fn from(level: Level) -> Self {
        Self::Int(i64::from(level.rank()))
    }
}

/// Invalid level input. Fatal at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A string that is neither numeric nor one of the known level names.
    InvalidName(String),
    /// Neither an integer nor a string (or an integer that does not fit a rank).
    InvalidType,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(s) => write!(f, "'{s}' is not a valid log level string."),
            Self::InvalidType => {
                write!(f, "--log-level should be an integer or valid log level string.")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Numeric parse first, then a case-insensitive name lookup.
///
/// # Errors
/// `InvalidName` for unknown strings, `InvalidType` for anything that is not
/// an integer or a string.
pub fn normalize(input: &LevelInput) -> Result<Rank, LevelError> {
    match input {
        LevelInput::Int(n) => Rank::try_from(*n).map_err(|_| LevelError::InvalidType),
        LevelInput::Text(s) => normalize_str(s),
        LevelInput::Other(_) => Err(LevelError::InvalidType),
    }
}

/// String form of [`normalize`], used directly by the CLI.
///
/// # Errors
/// `InvalidName` when `s` is not numeric and not a known level name,
/// `InvalidType` when it is numeric but does not fit a rank.
pub fn normalize_str(s: &str) -> Result<Rank, LevelError> {
    let trimmed = s.trim();
    if is_integer(trimmed) {
        return trimmed.parse::<Rank>().map_err(|_| LevelError::InvalidType);
    }

    s.parse::<Level>()
        .map(Level::rank)
        .map_err(|_| LevelError::InvalidName(s.to_string()))
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
