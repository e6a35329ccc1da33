//! Log file location.
//! Resolved once from the configuration, the home directory and the running
//! executable's name: `{home}/{app_dir}/Errors/{program-name}.log`.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::LoggerConfig;
use crate::error::LoggerError;
use crate::platform::LogPaths;

pub const ERROR_DIR_NAME: &str = "Errors";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    base_dir: PathBuf,
    error_dir: PathBuf,
    log_file: Option<PathBuf>,
}

impl LogTarget {
    /// Resolve the target, reporting failures on stderr. A target whose log
    /// file cannot be determined disables durable writes.
    pub fn resolve(config: &LoggerConfig) -> Self {
        let home = match config.home_dir.clone().or_else(dirs::home_dir) {
            Some(home) => home,
            None => {
                eprintln!(
                    "errlog: {}",
                    LoggerError::PathResolution("no home directory".into())
                );
                return Self::disabled(PathBuf::from(&config.app_dir));
            }
        };

        let program = match config.program_name.clone() {
            Some(name) if name.is_empty() => Err(LoggerError::PathResolution(
                "empty program name".into(),
            )),
            Some(name) => Ok(name),
            None => current_program_name(),
        };
        match program {
            Ok(name) => Self::new(&home, &config.app_dir, &name),
            Err(e) => {
                eprintln!("errlog: {e}");
                Self::disabled(home.join(&config.app_dir))
            }
        }
    }

    pub fn new(home: &Path, app_dir: &str, program_name: &str) -> Self {
        let base_dir = home.join(app_dir);
        let error_dir = base_dir.join(ERROR_DIR_NAME);
        let log_file = error_dir.join(log_file_name(program_name));
        debug!("Exception log target: {}", log_file.display());
        Self {
            base_dir,
            error_dir,
            log_file: Some(log_file),
        }
    }

    fn disabled(base_dir: PathBuf) -> Self {
        let error_dir = base_dir.join(ERROR_DIR_NAME);
        Self {
            base_dir,
            error_dir,
            log_file: None,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl LogPaths for LogTarget {
    fn error_dir(&self) -> &Path {
        &self.error_dir
    }

    fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// `my.app.jar` -> `my-app-jar.log`
pub fn log_file_name(program_name: &str) -> String {
    format!("{}.log", program_name.replace('.', "-"))
}

fn current_program_name() -> Result<String, LoggerError> {
    let exe = std::env::current_exe().map_err(|e| LoggerError::PathResolution(e.to_string()))?;
    exe.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            LoggerError::PathResolution(format!("executable path {:?} has no file name", exe))
        })
}
