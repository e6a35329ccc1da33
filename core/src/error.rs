use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures inside the logger. None of these reach callers of `log`.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to read bundled configuration: {0}")]
    ResourceResolution(String),

    #[error("cannot determine log file location: {0}")]
    PathResolution(String),

    #[error("failed to create error directory {path:?}: {source}")]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("failed to create log file {path:?}: {source}")]
    FileCreation { path: PathBuf, source: io::Error },

    #[error("failed to write compressed record to {path:?}: {source}")]
    CompressionWrite { path: PathBuf, source: io::Error },

    #[error("malformed record stream: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
