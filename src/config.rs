//! Command-line tool configuration
//!
//! Stored in `~/.config/blockedit/config.yaml`. Every field is optional.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings that persist across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Console log filter used when RUST_LOG is not set (e.g. "warn", "blockedit=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Also write debug-level logs to `~/.config/blockedit/logs/`
    #[serde(default)]
    pub file_logging: bool,

    /// Prefix each printed line with its 0-based index
    #[serde(default)]
    pub show_line_numbers: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            file_logging: false,
            show_line_numbers: false,
        }
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    ///
    /// Never fails. When an existing file cannot be used, the reason is
    /// returned alongside the defaults so the caller can report it once
    /// logging is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_or_default(&path),
            None => (Self::default(), None),
        }
    }

    /// Load config from `path`, treating a missing file as defaults
    pub fn load_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from an explicit path, failing on unreadable or invalid files
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
