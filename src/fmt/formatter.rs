//! The one formatter shared by every sink of a logger.

use super::style::{FieldStyles, LevelStyles};
use super::{DEFAULT_TIMESTAMP_FORMAT, FormatTemplate, FormatValues, Placeholder};
use crate::output::LogRecord;

/// Template plus timestamp format. Cloned into each sink at build time.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    template: FormatTemplate,
    timestamp_format: Option<String>,
}

impl Formatter {
    #[must_use]
    pub fn new(template: &str) -> Self {
        Self {
            template: FormatTemplate::parse(template),
            timestamp_format: None,
        }
    }

    /// strftime pattern for `{timestamp}`.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub const fn template(&self) -> &FormatTemplate {
        &self.template
    }

    fn values(&self, record: &LogRecord) -> FormatValues {
        let ts_format = self
            .timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT);

        FormatValues::new()
            .timestamp(record.timestamp.format(ts_format).to_string())
            .level(record.level_name.as_str())
            .caller(record.caller.as_str())
            .msg(record.message.as_str())
            .target(record.target.as_str())
            .rank(record.rank.to_string())
    }

    /// Plain line, as written to files.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        self.template.render(&self.values(record))
    }

    /// Console line: columns styled by `fields`, the message by `levels`.
    #[must_use]
    pub fn format_colored(
        &self,
        record: &LogRecord,
        fields: &FieldStyles,
        levels: &LevelStyles,
    ) -> String {
        let values = self.values(record);
        self.template.render_with(&values, |ph, padded| match ph {
            Placeholder::Msg => levels.get(record.rank).paint(&padded),
            _ => fields.get(ph).paint(&padded),
        })
    }
}
