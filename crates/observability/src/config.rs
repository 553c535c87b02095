use core::str::FromStr;

use thiserror::Error;

/// Filter directive variable (same syntax as `tracing_subscriber::EnvFilter`).
pub const FILTER_ENV: &str = "RUST_LOG";
/// Output format variable: `json` or `pretty`.
pub const FORMAT_ENV: &str = "SHOPKIT_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log format {0:?} (expected \"json\" or \"pretty\")")]
    InvalidLogFormat(String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Multi-line human-readable output for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read `RUST_LOG` and `SHOPKIT_LOG_FORMAT` through `lookup` (normally
    /// `std::env::var`); unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }

        Ok(config)
    }

    /// Infallible resolution used by [`crate::init`]: an invalid setting yields
    /// the defaults, with the error handed back for reporting.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> (Self, Option<ConfigError>) {
        match Self::from_lookup(lookup) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
