//! Interfaces that let hosts and tests place the log file themselves.

use std::path::Path;

/// Where durable records go.
pub trait LogPaths {
    fn error_dir(&self) -> &Path;
    /// `None` disables durable writes.
    fn log_file(&self) -> Option<&Path>;
}
