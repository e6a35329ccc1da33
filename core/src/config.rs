//! Configuration loading.
//! The default configuration is bundled at build time; hosts may inject
//! their own before the logger resolves its target.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoggerError;

const BUNDLED_CONFIG: &str = include_str!("../resources/errlog.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Subdirectory of the home directory. Empty means the home directory itself.
    #[serde(default)]
    pub app_dir: String,
    /// Overrides `dirs::home_dir()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_dir: Option<PathBuf>,
    /// Overrides the running executable's file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl LoggerConfig {
    pub fn new(app_dir: impl Into<String>) -> Self {
        Self {
            app_dir: app_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, LoggerError> {
        toml::from_str(content).map_err(|e| LoggerError::Config(e.to_string()))
    }

    /// Load a TOML file from disk.
    pub fn load(path: &Path) -> Result<Self, LoggerError> {
        debug!("Loading logger config from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| LoggerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), LoggerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LoggerError::Config(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LoggerError::Config(e.to_string()))?;
        fs::write(path, content).map_err(|e| LoggerError::Config(e.to_string()))?;
        info!("Saved logger config to {:?}", path);
        Ok(())
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> Result<Self, LoggerError> {
        Self::from_toml_str(BUNDLED_CONFIG)
            .map_err(|e| LoggerError::ResourceResolution(e.to_string()))
    }

    /// Bundled configuration, or an empty `app_dir` if it cannot be read.
    pub fn bundled_or_default() -> Self {
        Self::from_resource_or_default(BUNDLED_CONFIG)
    }

    /// Parse a bundled resource, degrading to an empty `app_dir` on failure.
    pub fn from_resource_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                let e = LoggerError::ResourceResolution(e.to_string());
                eprintln!("errlog: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = LoggerConfig::bundled().unwrap();
        assert_eq!(config.app_dir, ".errlog");
        assert!(config.home_dir.is_none());
    }

    #[test]
    fn broken_resource_degrades_to_empty_dir() {
        let config = LoggerConfig::from_resource_or_default("app_dir = [unterminated");
        assert_eq!(config, LoggerConfig::default());
        assert!(config.app_dir.is_empty());
    }

    #[test]
    fn parses_overrides() {
        let config = LoggerConfig::from_toml_str(
            r#"
            app_dir = "MyApp"
            home_dir = "/tmp/home"
            program_name = "tool.jar"
            "#,
        )
        .unwrap();
        assert_eq!(config.app_dir, "MyApp");
        assert_eq!(config.home_dir, Some(PathBuf::from("/tmp/home")));
        assert_eq!(config.program_name.as_deref(), Some("tool.jar"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errlog.toml");
        fs::write(&path, "app_dir = \"Loaded\"\n").unwrap();
        assert_eq!(LoggerConfig::load(&path).unwrap().app_dir, "Loaded");
        assert!(LoggerConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn save_then_load_keeps_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/errlog.toml");
        let config = LoggerConfig::new("Saved").with_program_name("tool");
        config.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("app_dir = \"Saved\""));
        assert!(!text.contains("home_dir"));
        assert_eq!(LoggerConfig::load(&path).unwrap(), config);
    }
}
