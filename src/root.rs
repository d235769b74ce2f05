//! The process-wide root logger.
//!
//! Set once by [`crate::setup::configure`] and never torn down. Calls made
//! before installation silently vanish, so early startup code can log freely.

use crate::error::Error;
use crate::level::{Rank, level_filter};
use crate::logger::Logger;
use std::sync::OnceLock;

static ROOT: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the root logger and as the `log` crate backend.
///
/// # Errors
/// `AlreadyInitialized` if a root logger is already installed.
pub fn install(logger: Logger) -> Result<&'static Logger, Error> {
    if ROOT.set(logger).is_err() {
        return Err(Error::AlreadyInitialized);
    }
    let root = ROOT.get().ok_or(Error::AlreadyInitialized)?;

    if log::set_logger(root).is_ok() {
        log::set_max_level(level_filter(root.min_level()));
    } else {
        root.warning(
            "install",
            "another `log` backend is already installed; `log` records bypass this logger",
        );
    }

    Ok(root)
}

/// The installed root logger, if any.
#[must_use]
pub fn get() -> Option<&'static Logger> {
    ROOT.get()
}

/// Entry point of the [`log!`](crate::log!) macro.
pub fn dispatch(level: impl Into<Rank>, caller: &str, target: &str, msg: &str) {
    if let Some(logger) = ROOT.get() {
        logger.log_at(level.into(), caller, target, msg);
    }
}

/// Logs under an accessor name such as `"spam"`. False if the root logger
/// is missing or no level answers to `accessor`.
pub fn log_named(accessor: &str, caller: &str, msg: &str) -> bool {
    ROOT.get()
        .is_some_and(|logger| logger.log_named(accessor, caller, msg))
}

/// Reduces a `type_name` path such as `app::run::{{closure}}::__caller` to `run`.
#[doc(hidden)]
#[must_use]
pub fn caller_name(path: &str) -> &str {
    let mut path = path.strip_suffix("::__caller").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Logs through the root logger, recording the enclosing function as the caller.
///
/// ```
/// use logsetup::Level;
///
/// fn connect() {
///     logsetup::log!(Level::Success, "connected after {} tries", 3);
///     logsetup::log!(17, "custom rank");
/// }
/// # connect();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        fn __caller() {}
        $crate::root::dispatch(
            $level,
            $crate::root::caller_name(::std::any::type_name_of_val(&__caller)),
            ::std::module_path!(),
            &::std::format!($($arg)+),
        )
    }};
}
