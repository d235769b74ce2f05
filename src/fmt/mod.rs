//! Line rendering: templates, the shared formatter, and console styling.

mod format;
mod formatter;
pub mod style;

pub use format::{Alignment, FormatSegment, FormatTemplate, FormatValues, Placeholder, Width};
pub use formatter::Formatter;
pub use style::{Color, FieldStyles, LevelStyles, Style};

/// `timestamp :: LEVEL(8-wide) :: callerFunction(17-wide) - message`.
pub const DEFAULT_FORMAT: &str = "{timestamp} :: {level:<8} :: {caller:<17} - {msg}";

/// Millisecond precision after a comma, e.g. `2024-03-01 14:02:11,042`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";
