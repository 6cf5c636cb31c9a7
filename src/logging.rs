//! Logging setup for the binary, powered by tracing-subscriber.
//!
//! Library code only emits `tracing` events; nothing is printed until a
//! subscriber is installed here.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Log format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text: timestamp LEVEL target - message
    Compact,
    /// JSON Lines for structured logging
    Json,
}

impl LogFormat {
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    // rusqlite internals are never interesting at our default levels
    let directives = format!("{level},rusqlite=warn");
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", directives, e))
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_env_filter(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match LogFormat::from_str_lossy(&config.format) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
