//! Stepwise logger construction. Sinks are only created in `build`, once the
//! format is final, so every sink gets the same formatter.

use super::Logger;
use crate::fmt::{DEFAULT_FORMAT, DEFAULT_TIMESTAMP_FORMAT, FieldStyles, Formatter, LevelStyles};
use crate::level::{Level, Rank};
use crate::output::{FileOutput, Output, TerminalOutput};
use crate::registry::LevelRegistry;
use std::path::PathBuf;

enum SinkSpec {
    Terminal {
        colors: Option<bool>,
        field_styles: FieldStyles,
        level_styles: LevelStyles,
    },
    File {
        prefix: String,
        path: Option<PathBuf>,
    },
    Custom(Box<dyn Output>),
}

pub struct LoggerBuilder {
    min_level: Rank,
    format: String,
    timestamp_format: String,
    registry: LevelRegistry,
    sinks: Vec<SinkSpec>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info threshold, default format, standard levels only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info.rank(),
            format: DEFAULT_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            registry: LevelRegistry::new(),
            sinks: Vec::new(),
        }
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<Rank>) -> Self {
        self.min_level = level.into();
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

    /// Level names shown in the `{level}` column come from here.
    #[must_use]
    pub fn registry(mut self, registry: LevelRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            colors: None,
            field_styles: FieldStyles::default(),
            level_styles: LevelStyles::default(),
        }
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            prefix: String::new(),
            path: None,
        }
    }

    /// Attaches a sink of the caller's own.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.sinks.push(SinkSpec::Custom(Box::new(output)));
        self
    }

    /// Creates the sinks. File sinks are opened here.
    ///
    /// # Errors
    /// Fails if a file sink cannot be opened.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let formatter = Formatter::new(&self.format).timestamp_format(self.timestamp_format);

        let mut outputs: Vec<Box<dyn Output>> = Vec::with_capacity(self.sinks.len());
        for sink in self.sinks {
            let output: Box<dyn Output> = match sink {
                SinkSpec::Terminal {
                    colors,
                    field_styles,
                    level_styles,
                } => {
                    let mut terminal = TerminalOutput::new(formatter.clone())
                        .field_styles(field_styles)
                        .level_styles(level_styles);
                    if let Some(enabled) = colors {
                        terminal = terminal.colors(enabled);
                    }
                    Box::new(terminal)
                }
                SinkSpec::File { prefix, path } => Box::new(match path {
                    Some(path) => FileOutput::open_path(path, formatter.clone())?,
                    None => FileOutput::open(&prefix, formatter.clone())?,
                }),
                SinkSpec::Custom(output) => output,
            };
            outputs.push(output);
        }

        Ok(Logger {
            min_level: self.min_level,
            outputs,
            registry: self.registry,
            formatter,
        })
    }
}

pub struct TerminalBuilder {
    parent: LoggerBuilder,
    colors: Option<bool>,
    field_styles: FieldStyles,
    level_styles: LevelStyles,
}

impl TerminalBuilder {
    /// Forces colors on or off; left alone, they follow whether stderr is a terminal.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    #[must_use]
    pub fn field_styles(mut self, styles: FieldStyles) -> Self {
        self.field_styles = styles;
        self
    }

    #[must_use]
    pub fn level_styles(mut self, styles: LevelStyles) -> Self {
        self.level_styles = styles;
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.sinks.push(SinkSpec::Terminal {
            colors: self.colors,
            field_styles: self.field_styles,
            level_styles: self.level_styles,
        });
        self.parent
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    prefix: String,
    path: Option<PathBuf>,
}

impl FileBuilder {
    /// Prepended verbatim to `YYYYMMDD.log`; `"logs/app-"` gives `logs/app-20240301.log`.
    #[must_use]
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Skips the dated name entirely.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.sinks.push(SinkSpec::File {
            prefix: self.prefix,
            path: self.path,
        });
        self.parent
    }
}
