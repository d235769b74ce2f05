//! Configures logging from flags and config, then emits one record per level
//! so the effect of `--log-level` is visible.
//!
//! Usage:
//!   logsetup [--log-level <int|name>] [--logToFile] [--log-path <prefix>]
//!            [--color <auto|always|never>] [--no-console] [--config <path>]

use clap::Parser;
use logsetup::cli::Cli;
use logsetup::config::Config;
use logsetup::{Level, setup};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Level validation runs before anything is configured.
    let options = match cli.logging.resolve(&config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match setup::configure(&options) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    logsetup::log!(Level::Success, "Logging setup completed");
    logsetup::log!(Level::Info, "INFO logging enabled");
    logsetup::log!(Level::Debug, "DEBUG logging enabled");
    logsetup::log!(Level::Spam, "SPAM logging enabled");
    logsetup::log!(Level::Debug, "args: {:?}", cli.logging);

    if let Err(e) = logger.flush() {
        eprintln!("ERROR: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
