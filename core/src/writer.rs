//! Durable writes: one gzip member appended per record.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;

use crate::error::LoggerError;
use crate::platform::LogPaths;
use crate::records::write_chunk;

// Serializes appends within this process. Other processes are not coordinated.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Append `text` as one compressed record. A target without a log file is a no-op.
pub fn append_record(paths: &dyn LogPaths, text: &str) -> Result<(), LoggerError> {
    let Some(log_file) = paths.log_file() else {
        return Ok(());
    };
    let error_dir = paths.error_dir();

    let _guard = WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if !error_dir.is_dir() {
        fs::create_dir_all(error_dir).map_err(|source| LoggerError::DirectoryCreation {
            path: error_dir.to_path_buf(),
            source,
        })?;
        debug!("Created error directory {:?}", error_dir);
    }

    if !log_file.exists() {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(log_file)
            .map_err(|source| LoggerError::FileCreation {
                path: log_file.to_path_buf(),
                source,
            })?;
    }

    let write_err = |source: std::io::Error| LoggerError::CompressionWrite {
        path: log_file.to_path_buf(),
        source,
    };
    let file = OpenOptions::new()
        .append(true)
        .open(log_file)
        .map_err(write_err)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    write_chunk(&mut encoder, text).map_err(write_err)?;
    let mut file = encoder.finish().map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
