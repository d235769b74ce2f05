use chrono::Local;
use logsetup::setup::build_logger;
use logsetup::{
    ColorMode, DEFAULT_FORMAT, Error, Level, LevelRegistry, RegistryError, SetupOptions,
};
use std::fs;
use tempfile::TempDir;

fn today() -> String {
    Local::now().format("%Y%m%d").to_string()
}

#[test]
fn default_options() {
    let options = SetupOptions::default();
    assert_eq!(options.level, Level::Debug.rank());
    assert!(options.console);
    assert!(!options.file);
    assert_eq!(options.format, DEFAULT_FORMAT);
}

#[test]
fn console_only_creates_no_file() {
    let tmp_dir = TempDir::new().unwrap();
    let options = SetupOptions::new()
        .level(Level::Info)
        .path_prefix(format!("{}/", tmp_dir.path().display()))
        .colors(ColorMode::Never);

    let logger = build_logger(&options, &mut LevelRegistry::new()).unwrap();
    logger.info("run", "console only");

    assert_eq!(logger.output_count(), 1);
    assert_eq!(logger.min_level(), 20);
    assert_eq!(logger.format(), DEFAULT_FORMAT);
    for placeholder in ["{timestamp}", "{level:<8}", "{caller:<17}", "{msg}"] {
        assert!(logger.format().contains(placeholder), "{placeholder}");
    }
    assert_eq!(fs::read_dir(tmp_dir.path()).unwrap().count(), 0);
}

#[test]
fn file_enabled_creates_dated_file_with_formatted_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let options = SetupOptions::new()
        .level(Level::Spam)
        .console(false)
        .file(true)
        .path_prefix(format!("{}/", tmp_dir.path().display()));

    let logger = build_logger(&options, &mut LevelRegistry::new()).unwrap();
    let path = tmp_dir.path().join(format!("{}.log", today()));
    assert!(path.exists());

    logger.success("main", "Logging setup completed");
    logger.spam("main", "SPAM logging enabled");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" :: SUCCESS  :: main              - Logging setup completed"));
    assert!(lines[1].ends_with(" :: SPAM     :: main              - SPAM logging enabled"));
}

#[test]
fn console_and_file_both_attached() {
    let tmp_dir = TempDir::new().unwrap();
    let options = SetupOptions::new()
        .file(true)
        .colors(ColorMode::Never)
        .path_prefix(format!("{}/", tmp_dir.path().display()));

    let logger = build_logger(&options, &mut LevelRegistry::new()).unwrap();
    assert_eq!(logger.output_count(), 2);
}

#[test]
fn custom_levels_are_registered_into_the_given_registry() {
    let mut registry = LevelRegistry::new();
    let options = SetupOptions::new().console(false);

    let logger = build_logger(&options, &mut registry).unwrap();
    assert_eq!(registry.rank_of("SPAM"), Some(5));
    assert_eq!(registry.rank_of("SUCCESS"), Some(35));
    assert_eq!(logger.registry().name_of(35), "SUCCESS");
}

#[test]
fn second_build_against_same_registry_fails() {
    let mut registry = LevelRegistry::new();
    let options = SetupOptions::new().console(false);

    build_logger(&options, &mut registry).unwrap();
    let Err(err) = build_logger(&options, &mut registry) else {
        panic!("second setup should collide");
    };
    assert!(matches!(
        err,
        Error::Registry(RegistryError::LevelExists(ref name)) if name == "SPAM"
    ));
}
