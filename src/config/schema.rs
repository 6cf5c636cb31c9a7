use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key the session is mirrored under.
pub const DEFAULT_SESSION_KEY: &str = "workperk_user";

/// Top-level configuration, read from `~/.workperk/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where this config was loaded from (not serialized).
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub slot: SlotConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ── Slot ────────────────────────────────────────────────────────

/// Durable session slot configuration (`[slot]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Backend: "memory", "file" or "sqlite"
    #[serde(default = "default_slot_kind")]
    pub kind: String,

    /// Data directory (file) or database path (sqlite).
    /// Defaults to `~/.workperk/session`.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Key the session is stored under.
    #[serde(default = "default_session_key")]
    pub key: String,
}

fn default_slot_kind() -> String {
    "file".into()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.into()
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            kind: default_slot_kind(),
            path: None,
            key: default_session_key(),
        }
    }
}

impl SlotConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| super::workperk_dir().join("session"))
    }
}

// ── Logging ─────────────────────────────────────────────────────

/// Logging configuration (`[logging]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_log_format() -> String {
    "compact".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
