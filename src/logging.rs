//! Logging bootstrap
//!
//! The library crates only emit through `tracing` macros and never install
//! a subscriber themselves; a hosting binary calls [`init_logging`] once at
//! startup. Filtering follows `RUST_LOG` unless an explicit filter is set.

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// Compact single-line format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Compact;
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directives, e.g. `"info,core_sync=debug"`; `RUST_LOG` applies
    /// when unset
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Logging initialization errors
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Invalid filter directives: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Install the global `tracing` subscriber
///
/// # Errors
///
/// Returns an error if the filter directives do not parse or a subscriber
/// is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), InitError> {
    let filter = match &config.filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| InitError::Filter(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let builder = fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| InitError::Subscriber(e.to_string()))
}
