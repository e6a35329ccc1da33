use std::path::PathBuf;

/// Optional host configuration, e.g. `~/.config/errlog/config.toml`.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("errlog")
        .join("config.toml")
}
