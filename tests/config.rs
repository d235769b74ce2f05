use logsetup::{ColorMode, Config, Error, LevelError, LevelInput};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    let options = config.to_options().unwrap();

    assert_eq!(options.level, 20);
    assert!(options.console);
    assert!(!options.file);
    assert_eq!(options.colors, ColorMode::Auto);
}

#[test]
fn level_accepts_integer_or_name() {
    let config = Config::parse("[general]\nlevel = 17\n").unwrap();
    assert_eq!(config.general.level, LevelInput::Int(17));
    assert_eq!(config.to_options().unwrap().level, 17);

    let config = Config::parse("[general]\nlevel = \"Success\"\n").unwrap();
    assert_eq!(config.to_options().unwrap().level, 35);
}

#[test]
fn float_level_is_a_type_error() {
    let config = Config::parse("[general]\nlevel = 1.5\n").unwrap();
    let err = config.to_options().unwrap_err();
    assert!(matches!(err, Error::Level(LevelError::InvalidType)));
}

#[test]
fn sections_load_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("logsetup.toml");
    fs::write(
        &path,
        r#"
[general]
level = "warning"
format = "{level} {msg}"

[terminal]
colors = "never"

[file]
enabled = true
path_prefix = "logs/app-"
"#,
    )
    .unwrap();

    let options = Config::load_from(&path).unwrap().to_options().unwrap();
    assert_eq!(options.level, 30);
    assert_eq!(options.format, "{level} {msg}");
    assert_eq!(options.colors, ColorMode::Never);
    assert!(options.file);
    assert_eq!(options.path_prefix, "logs/app-");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::parse("[general\nlevel = ").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[cfg(feature = "cli")]
mod cli_overrides {
    use super::*;
    use logsetup::cli::LoggingArgs;

    #[test]
    fn cli_flags_override_config() {
        let config = Config::parse("[general]\nlevel = \"error\"\n[file]\npath_prefix = \"a-\"\n").unwrap();
        let args = LoggingArgs {
            log_level: Some("spam".to_string()),
            log_to_file: true,
            log_path: Some("b-".to_string()),
            color: Some(ColorMode::Always),
            no_console: true,
        };

        let options = args.resolve(&config).unwrap();
        assert_eq!(options.level, 5);
        assert!(options.file);
        assert_eq!(options.path_prefix, "b-");
        assert_eq!(options.colors, ColorMode::Always);
        assert!(!options.console);
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let config = Config::parse("[general]\nlevel = 40\n").unwrap();
        let options = LoggingArgs::default().resolve(&config).unwrap();
        assert_eq!(options.level, 40);
        assert!(!options.file);
    }

    #[test]
    fn invalid_cli_level_is_rejected() {
        let args = LoggingArgs {
            log_level: Some("verbose".to_string()),
            ..LoggingArgs::default()
        };
        let err = args.resolve(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "'verbose' is not a valid log level string.");
    }

    #[test]
    fn cli_level_shadows_invalid_config_level() {
        let config = Config::parse("[general]\nlevel = \"verbose\"\n").unwrap();
        assert!(config.to_options().is_err());

        let args = LoggingArgs {
            log_level: Some("debug".to_string()),
            ..LoggingArgs::default()
        };
        let options = args.resolve(&config).unwrap();
        assert_eq!(options.level, 10);
    }

    #[test]
    fn invalid_config_level_fails_without_cli_level() {
        let config = Config::parse("[general]\nlevel = \"verbose\"\n").unwrap();
        let err = LoggingArgs::default().resolve(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Level(LevelError::InvalidName(ref name)) if name == "verbose"
        ));
    }
}
