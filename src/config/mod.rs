pub mod schema;

pub use schema::{Config, LoggingConfig, SlotConfig, DEFAULT_SESSION_KEY};

use anyhow::{Context, Result};
use directories::UserDirs;
use std::path::{Path, PathBuf};

/// `~/.workperk`, or a relative `.workperk` when no home directory exists.
pub fn workperk_dir() -> PathBuf {
    UserDirs::new()
        .map(|u| u.home_dir().join(".workperk"))
        .unwrap_or_else(|| PathBuf::from(".workperk"))
}

impl Config {
    pub fn default_path() -> PathBuf {
        workperk_dir().join("config.toml")
    }

    /// Load the config at `path`. A missing file yields defaults; a file
    /// that does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<Config>(&contents)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Config::default()
        };
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Apply `WORKPERK_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(kind) = lookup("WORKPERK_SLOT_KIND").filter(|v| !v.trim().is_empty()) {
            self.slot.kind = kind.trim().to_string();
        }
        if let Some(path) = lookup("WORKPERK_SLOT_PATH").filter(|v| !v.trim().is_empty()) {
            self.slot.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("WORKPERK_LOG").filter(|v| !v.trim().is_empty()) {
            self.logging.level = level;
        }
    }
}
