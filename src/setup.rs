//! Logger configurator: custom levels, sinks, one shared format, root install.

use crate::error::Error;
use crate::fmt::{DEFAULT_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use crate::level::{Level, Rank};
use crate::logger::Logger;
use crate::output::ColorMode;
use crate::registry::{self, LevelRegistry, RegistryError};
use crate::root;
use std::sync::PoisonError;

/// Levels every configured process gains on top of the standard set.
pub const CUSTOM_LEVELS: [(&str, Rank); 2] = [
    ("SPAM", Level::Spam.rank()),
    ("SUCCESS", Level::Success.rank()),
];

/// Inputs to [`configure`].
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Minimum rank that reaches the sinks.
    pub level: Rank,
    pub console: bool,
    pub file: bool,
    /// Prepended to `YYYYMMDD.log`.
    pub path_prefix: String,
    pub colors: ColorMode,
    pub format: String,
    pub timestamp_format: String,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            level: Level::Debug.rank(),
            console: true,
            file: false,
            path_prefix: String::new(),
            colors: ColorMode::Auto,
            format: DEFAULT_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl SetupOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<Rank>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub const fn file(mut self, enabled: bool) -> Self {
        self.file = enabled;
        self
    }

    #[must_use]
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.colors = mode;
        self
    }

    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = template.into();
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

/// Adds `SPAM` and `SUCCESS` to `registry`.
///
/// # Errors
/// Fails on the first collision; a registry that was already set up fails on `SPAM`.
pub fn register_custom_levels(registry: &mut LevelRegistry) -> Result<(), RegistryError> {
    for (name, rank) in CUSTOM_LEVELS {
        registry.register(name, rank, None)?;
    }
    Ok(())
}

/// The whole configuration pipeline against an explicit registry, without
/// touching process-wide state.
///
/// # Errors
/// Level collisions in `registry`, or a file sink that cannot be opened.
pub fn build_logger(options: &SetupOptions, registry: &mut LevelRegistry) -> Result<Logger, Error> {
    register_custom_levels(registry)?;

    let mut builder = Logger::builder()
        .registry(registry.clone())
        .format(options.format.as_str())
        .timestamp_format(options.timestamp_format.as_str());

    if options.console {
        builder = builder
            .terminal()
            .colors(options.colors.enabled())
            .done();
    }

    if options.file {
        builder = builder
            .file()
            .path_prefix(options.path_prefix.as_str())
            .done();
    }

    builder.level(options.level).build()
}

/// Configures the process: registers the custom levels globally, builds the
/// sinks and installs the result as the root logger.
///
/// Meant to run once, early in `main`. A second call fails with a level
/// collision on `SPAM`.
///
/// # Errors
/// Level collisions, file sink failures, or an already-installed root logger.
pub fn configure(options: &SetupOptions) -> Result<&'static Logger, Error> {
    let logger = {
        let mut registry = registry::global()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        build_logger(options, &mut registry)?
    };

    root::install(logger)
}
