//! Tracing/logging initialization.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "ASSISTANCE_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line output.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
pub struct LogFormatError(pub String);

impl FromStr for LogFormat {
    type Err = LogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(LogFormatError(s.to_string())),
        }
    }
}

impl LogFormat {
    /// Resolve from [`LOG_FORMAT_VAR`]; unset means JSON.
    pub fn from_env() -> Result<Self, LogFormatError> {
        match std::env::var(LOG_FORMAT_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(LogFormat::default()),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Filtering comes from `RUST_LOG` (default `info`). An invalid
/// `ASSISTANCE_LOG_FORMAT` falls back to JSON and is reported once the
/// subscriber is installed.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    match LogFormat::from_env() {
        Ok(format) => init_with(format),
        Err(err) => {
            init_with(LogFormat::Json);
            ::tracing::warn!(error = %err, "ignoring invalid log format");
        }
    }
}

/// Initialize tracing/logging with an explicit output format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
