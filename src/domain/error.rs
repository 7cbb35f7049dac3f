//! Application error types with proper error chaining.

use thiserror::Error;

use super::types::Amount;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Reducing amount {amount} by {reduce_by} overflows")]
    AmountOverflow { amount: Amount, reduce_by: Amount },
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
