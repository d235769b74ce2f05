//! Unified error type for all logsetup operations.

use crate::level::LevelError;
use crate::registry::RegistryError;

/// Error type for logsetup operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// A level name, accessor, method or rank is already registered.
    Registry(RegistryError),
    /// A level argument that is neither an integer nor a known level name.
    Level(LevelError),
    /// The process-wide root logger was already installed.
    AlreadyInitialized,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Registry(e) => write!(f, "{e}"),
            Self::Level(e) => write!(f, "{e}"),
            Self::AlreadyInitialized => write!(f, "root logger already initialized"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Registry(e) => Some(e),
            Self::Level(e) => Some(e),
            Self::ConfigDirNotFound | Self::AlreadyInitialized => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<LevelError> for Error {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}
