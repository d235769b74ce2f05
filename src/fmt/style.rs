//! ANSI styling for the console sink.
//!
//! Plain 8-color SGR codes rather than true color: the console palette is the
//! user's terminal theme, so "green" should mean the theme's green.

use super::Placeholder;
use crate::level::{Level, Rank};
use std::collections::HashMap;
use std::fmt::Write;

/// Terminates any active SGR styling.
pub const RESET: &str = "\x1b[0m";

/// The eight basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// SGR foreground code (30-37).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }
}

/// Foreground color plus weight. `Style::default()` renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub faint: bool,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: None,
            bold: false,
            faint: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold && !self.faint
    }

    /// `\x1b[1;32m`-style opener, or an empty string for a plain style.
    #[must_use]
    pub fn prefix(&self) -> String {
        if self.is_plain() {
            return String::new();
        }

        let mut codes = Vec::new();
        if self.bold {
            codes.push(1);
        }
        if self.faint {
            codes.push(2);
        }
        if let Some(color) = self.color {
            codes.push(color.fg_code());
        }

        let mut out = String::from("\x1b[");
        for (i, code) in codes.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            let _ = write!(out, "{code}");
        }
        out.push('m');
        out
    }

    /// Wraps `text`; plain styles return it untouched.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        format!("{}{text}{RESET}", self.prefix())
    }
}

/// Per-column styles. The message column is styled by level instead.
#[derive(Debug, Clone)]
pub struct FieldStyles {
    styles: HashMap<Placeholder, Style>,
}

impl Default for FieldStyles {
    /// Timestamp green, level name bold, caller blue.
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(Placeholder::Timestamp, Style::new().fg(Color::Green));
        styles.insert(Placeholder::Level, Style::new().bold());
        styles.insert(Placeholder::Caller, Style::new().fg(Color::Blue));
        Self { styles }
    }
}

impl FieldStyles {
    /// No column styling at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    #[must_use]
    pub fn set(mut self, field: Placeholder, style: Style) -> Self {
        self.styles.insert(field, style);
        self
    }

    #[must_use]
    pub fn get(&self, field: Placeholder) -> Style {
        self.styles.get(&field).copied().unwrap_or_default()
    }
}

/// Message styles keyed by rank.
#[derive(Debug, Clone)]
pub struct LevelStyles {
    styles: HashMap<Rank, Style>,
}

impl Default for LevelStyles {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(Level::Spam.rank(), Style::new().fg(Color::Green).faint());
        styles.insert(Level::Debug.rank(), Style::new().fg(Color::Green));
        styles.insert(Level::Warning.rank(), Style::new().fg(Color::Yellow));
        styles.insert(Level::Success.rank(), Style::new().fg(Color::Green).bold());
        styles.insert(Level::Error.rank(), Style::new().fg(Color::Red));
        styles.insert(Level::Critical.rank(), Style::new().fg(Color::Red).bold());
        Self { styles }
    }
}

impl LevelStyles {
    #[must_use]
    pub fn set(mut self, rank: impl Into<Rank>, style: Style) -> Self {
        self.styles.insert(rank.into(), style);
        self
    }

    /// Ranks without an entry (info, custom ranks) render unstyled.
    #[must_use]
    pub fn get(&self, rank: Rank) -> Style {
        self.styles.get(&rank).copied().unwrap_or_default()
    }
}
