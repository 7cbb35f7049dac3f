//! Structured logging infrastructure.
//!
//! Installs a global `tracing` subscriber writing to stderr, either as
//! human-readable lines or as JSON.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::domain::ConfigError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::ParseError(format!(
                "unknown log format '{other}', expected 'pretty' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global tracing subscriber.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `info` or
/// `transaction_mock_builder=debug`.
///
/// # Errors
/// Returns an error if the filter does not parse or a subscriber is
/// already installed.
pub fn init_tracing(format: LogFormat, filter: &str) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_new(filter)?;

    let (json, pretty) = match format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .try_init()?;

    Ok(())
}
