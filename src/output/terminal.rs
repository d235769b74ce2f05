//! Console sink on stderr, colorized when the stream is a terminal.

use crate::fmt::{FieldStyles, Formatter, LevelStyles};

use super::{LogRecord, Output};
use serde::Deserialize;
use std::io::{self, IsTerminal, Write};

/// When to emit ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ColorMode {
    /// Only when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stderr().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    formatter: Formatter,
    colors_enabled: bool,
    field_styles: FieldStyles,
    level_styles: LevelStyles,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(Formatter::default())
    }
}

impl TerminalOutput {
    /// Colors follow [`ColorMode::Auto`] until told otherwise.
    #[must_use]
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter,
            colors_enabled: ColorMode::Auto.enabled(),
            field_styles: FieldStyles::default(),
            level_styles: LevelStyles::default(),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
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
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    #[must_use]
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// The exact line written for `record`, escapes included.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        if self.colors_enabled {
            self.formatter
                .format_colored(record, &self.field_styles, &self.level_styles)
        } else {
            self.formatter.format(record)
        }
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let line = self.render(record);
        writeln!(io::stderr().lock(), "{line}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}
