//! Tests for logger functionality.

mod common;

use common::Capture;
use logsetup::setup::register_custom_levels;
use logsetup::{DEFAULT_FORMAT, Level, LevelRegistry, Logger};

fn custom_registry() -> LevelRegistry {
    let mut registry = LevelRegistry::new();
    register_custom_levels(&mut registry).unwrap();
    registry
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build().unwrap();
    assert_eq!(logger.min_level(), Level::Info.rank());
    assert_eq!(logger.output_count(), 0);
    assert_eq!(logger.format(), DEFAULT_FORMAT);
}

#[test]
fn builder_with_integer_level() {
    let logger = Logger::builder().level(17).build().unwrap();
    assert_eq!(logger.min_level(), 17);
    assert!(logger.enabled(Level::Info));
    assert!(!logger.enabled(Level::Debug));
}

#[test]
fn builder_multiple_outputs() {
    let logger = Logger::builder()
        .terminal()
        .colors(false)
        .done()
        .output(Capture::default())
        .build()
        .unwrap();
    assert_eq!(logger.output_count(), 2);
}

#[test]
fn log_respects_level() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Warning)
        .output(capture.clone())
        .build()
        .unwrap();

    logger.info("run", "filtered");
    logger.warning("run", "kept");
    logger.success("run", "kept too");

    assert_eq!(capture.messages(), vec!["kept", "kept too"]);
}

#[test]
fn records_carry_registered_level_names() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(0)
        .registry(custom_registry())
        .output(capture.clone())
        .build()
        .unwrap();

    logger.spam("run", "a");
    logger.success("run", "b");
    logger.log(17, "run", "c");

    let names: Vec<String> = capture.records().into_iter().map(|r| r.level_name).collect();
    assert_eq!(names, vec!["SPAM", "SUCCESS", "Level 17"]);
}

#[test]
fn log_named_uses_registered_accessor() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Spam)
        .registry(custom_registry())
        .output(capture.clone())
        .build()
        .unwrap();

    assert!(logger.log_named("spam", "run", "via accessor"));
    assert!(!logger.log_named("verbose", "run", "unknown"));

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rank, 5);
    assert_eq!(records[0].caller, "run");
}

#[test]
fn spam_without_registration_renders_generic_name() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Spam)
        .output(capture.clone())
        .build()
        .unwrap();

    logger.spam("run", "x");
    assert_eq!(capture.records()[0].level_name, "Level 5");
}

#[test]
fn log_facade_records_are_routed() {
    use log::Log;

    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Info)
        .output(capture.clone())
        .build()
        .unwrap();

    Log::log(
        &logger,
        &log::Record::builder()
            .args(format_args!("from facade"))
            .level(log::Level::Warn)
            .target("app::net")
            .module_path(Some("app::net"))
            .build(),
    );
    Log::log(
        &logger,
        &log::Record::builder()
            .args(format_args!("dropped"))
            .level(log::Level::Debug)
            .build(),
    );

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rank, 30);
    assert_eq!(records[0].caller, "net");
    assert_eq!(records[0].target, "app::net");
}
