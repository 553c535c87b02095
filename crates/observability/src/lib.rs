//! Tracing and logging (shared setup).

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// invalid `SHOPKIT_LOG_FORMAT` falls back to the defaults and is reported
/// once the subscriber is installed.
pub fn init() {
    let (config, invalid) = config::LogConfig::resolve(|key| std::env::var(key).ok());

    tracing::init_with(&config);

    if let Some(err) = invalid {
        ::tracing::warn!(%err, "invalid logging configuration; using defaults");
    }
}

/// Logging configuration (environment-driven).
pub mod config;

/// Tracing subscriber setup (filters, formatters).
pub mod tracing;

pub use config::{ConfigError, LogConfig, LogFormat};
