//! Tracing subscriber setup for the command-line tool
//!
//! The library itself only emits `tracing` events; nothing is printed unless
//! a subscriber is installed.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=blockedit::edit=trace` - module-level filtering
//!
//! Without RUST_LOG the console filter falls back to `log_level` from the config.
//!
//! # Log Files
//!
//! With `file_logging: true`, logs are also written to
//! `~/.config/blockedit/logs/blockedit.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;
use crate::config_paths::LOG_FILE_NAME;

/// Console filter: RUST_LOG if set and valid, otherwise the configured level
pub fn console_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output goes to stderr so edited text on stdout stays clean.
pub fn init(config: &Config) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter(config));

    // File layer - always debug level for troubleshooting
    let file_layer = if config.file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Report that the config file was unusable and defaults are in effect
pub fn warn_config_fallback(error: &anyhow::Error) {
    tracing::warn!("Using default config: {:#}", error);
}
