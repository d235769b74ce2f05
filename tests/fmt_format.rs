mod common;

use logsetup::fmt::{FormatSegment, FormatTemplate, FormatValues, Formatter, Placeholder};
use logsetup::DEFAULT_FORMAT;

#[test]
fn default_format_has_all_columns() {
    let template = FormatTemplate::parse(DEFAULT_FORMAT);
    for ph in [
        Placeholder::Timestamp,
        Placeholder::Level,
        Placeholder::Caller,
        Placeholder::Msg,
    ] {
        assert!(template.contains(ph), "{ph:?}");
    }
    assert_eq!(template.source(), DEFAULT_FORMAT);
}

#[test]
fn default_format_pads_level_and_caller() {
    let template = FormatTemplate::parse(DEFAULT_FORMAT);
    let values = FormatValues::new()
        .timestamp("T")
        .level("INFO")
        .caller("main")
        .msg("hello");

    assert_eq!(
        template.render(&values),
        "T :: INFO     :: main              - hello"
    );
}

#[test]
fn long_values_are_not_truncated() {
    let template = FormatTemplate::parse("{caller:<4}|");
    let values = FormatValues::new().caller("connect_upstream");
    assert_eq!(template.render(&values), "connect_upstream|");
}

#[test]
fn unknown_placeholder_stays_literal() {
    let template = FormatTemplate::parse("{scope} {msg}");
    assert_eq!(
        template.segments()[0],
        FormatSegment::Literal("{scope} ".to_string())
    );
    let values = FormatValues::new().msg("m");
    assert_eq!(template.render(&values), "{scope} m");
}

#[test]
fn unclosed_brace_is_literal() {
    let template = FormatTemplate::parse("{msg} {level");
    let values = FormatValues::new().msg("m").level("INFO");
    assert_eq!(template.render(&values), "m {level");
}

#[test]
fn formatter_renders_record() {
    let record = common::record(35, "SUCCESS", "main", "Logging setup completed");
    let line = Formatter::default().format(&record);
    assert_eq!(
        line,
        "2024-03-01 14:02:11,000 :: SUCCESS  :: main              - Logging setup completed"
    );
}

#[test]
fn formatter_custom_timestamp_and_extra_fields() {
    let record = common::record(17, "Level 17", "run", "m");
    let formatter = Formatter::new("{timestamp} {rank} {target} {msg}").timestamp_format("%H:%M");
    assert_eq!(formatter.format(&record), "14:02 17 app::net m");
}
