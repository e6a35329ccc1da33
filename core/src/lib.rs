//! Process-wide exception logger.
//!
//! Every call emits to the `log` facade. Persisted calls also append a
//! gzip-compressed record to `{home}/{app_dir}/Errors/{program}.log`.
//! Logging never fails the caller: internal errors are printed to stderr
//! and dropped.

pub mod config;
pub mod error;
pub mod platform;
pub mod record;
pub mod records;
pub mod target;
pub mod writer;

use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use log::Level;
pub use record::class_name;

use crate::platform::LogPaths;
use crate::record::{LogRecord, render_error};
use crate::target::LogTarget;

static CONFIG: OnceLock<LoggerConfig> = OnceLock::new();
static TARGET: OnceLock<LogTarget> = OnceLock::new();

/// Inject configuration before the first logging call. Returns the config
/// back if one is already in effect.
pub fn configure(config: LoggerConfig) -> Result<(), LoggerConfig> {
    CONFIG.set(config)
}

fn target() -> &'static LogTarget {
    TARGET.get_or_init(|| {
        let config = CONFIG.get_or_init(LoggerConfig::bundled_or_default);
        LogTarget::resolve(config)
    })
}

/// The resolved log file, or `None` when durable logging is disabled.
pub fn log_file() -> Option<&'static Path> {
    target().log_file()
}

/// Log `error` and persist it.
pub fn log<E: Error + ?Sized>(class: &str, level: Level, message: &str, error: &E) {
    log_with(class, level, message, error, true);
}

/// Log `error`, persisting it only when `persist` is set.
pub fn log_with<E: Error + ?Sized>(
    class: &str,
    level: Level,
    message: &str,
    error: &E,
    persist: bool,
) {
    log::log!(target: class, level, "{}: {}", message, render_error(error));
    if persist {
        let record = LogRecord::capture(class, error);
        if let Err(e) = writer::append_record(target(), &record.render()) {
            eprintln!("errlog: {e}");
        }
    }
}

/// Log an error with the calling module as the reporting class.
///
/// ```ignore
/// log_exception!(Level::Error, "sync failed", &err);
/// log_exception!(Level::Warn, "retrying", &err, false);
/// ```
#[macro_export]
macro_rules! log_exception {
    ($level:expr, $message:expr, $error:expr) => {
        $crate::log(module_path!(), $level, $message, $error)
    };
    ($level:expr, $message:expr, $error:expr, $persist:expr) => {
        $crate::log_with(module_path!(), $level, $message, $error, $persist)
    };
}
