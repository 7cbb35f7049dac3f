//! Demo configuration loaded from environment variables.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

use crate::domain::{Amount, ConfigError, TransactionId};
use crate::infra::LogFormat;

pub const TRANSACTION_ID_VAR: &str = "DEMO_TRANSACTION_ID";
pub const AMOUNT_VAR: &str = "DEMO_AMOUNT";
pub const REDUCE_BY_VAR: &str = "DEMO_REDUCE_BY";
pub const REFERENCE_TIME_VAR: &str = "DEMO_REFERENCE_TIME";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub transaction_id: TransactionId,
    pub starting_amount: Amount,
    pub reduce_by: Amount,
    pub reference_time: DateTime<FixedOffset>,
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            transaction_id: "demo-transaction".to_string(),
            starting_amount: 10,
            reduce_by: 2,
            // The epoch fallback is unreachable
            reference_time: Utc
                .fix()
                .with_ymd_and_hms(2021, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Create config from environment variables
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first variable that
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    ///
    /// Unset keys fall back to [`DemoConfig::default`].
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first key whose value
    /// does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let reference_time = match lookup(REFERENCE_TIME_VAR) {
            Some(raw) => DateTime::parse_from_rfc3339(raw.trim()).map_err(|e| {
                ConfigError::InvalidValue {
                    key: REFERENCE_TIME_VAR.to_string(),
                    message: e.to_string(),
                }
            })?,
            None => defaults.reference_time,
        };

        Ok(Self {
            transaction_id: lookup(TRANSACTION_ID_VAR).unwrap_or(defaults.transaction_id),
            starting_amount: parse_var(&lookup, AMOUNT_VAR, defaults.starting_amount)?,
            reduce_by: parse_var(&lookup, REDUCE_BY_VAR, defaults.reduce_by)?,
            reference_time,
            log_format: parse_var(&lookup, LOG_FORMAT_VAR, defaults.log_format)?,
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
