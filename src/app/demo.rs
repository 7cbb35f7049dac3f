//! Demo run exercising the transaction operations.
//!
//! Builds a transaction from the configured values, reduces it, and compares
//! it with a second transaction dated one year later.

use chrono::Months;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::{AppError, DomainError, Transaction};

use super::config::DemoConfig;

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub original: Transaction,
    pub reduced: Transaction,
    pub later: Transaction,
    pub later_is_after_original: bool,
    pub original_is_after_later: bool,
    pub original_is_after_itself: bool,
}

impl DemoReport {
    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Serialization` if serialization fails.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the demo against the given configuration.
///
/// # Errors
///
/// Returns an `AppError` if:
/// - reducing the starting amount overflows
/// - the reference time plus one year cannot be represented
#[instrument(skip(config), fields(transaction_id = %config.transaction_id))]
pub fn run_demo(config: &DemoConfig) -> Result<DemoReport, AppError> {
    let original = Transaction::new(
        config.transaction_id.clone(),
        config.starting_amount,
        config.reference_time,
    );

    let reduced = original.checked_reduce_by(config.reduce_by)?;
    info!(
        from = original.amount(),
        by = config.reduce_by,
        to = reduced.amount(),
        "Reduced transaction amount"
    );

    let later_time = config
        .reference_time
        .checked_add_months(Months::new(12))
        .ok_or_else(|| {
            DomainError::InvalidTimestamp(format!(
                "{} plus one year is out of range",
                config.reference_time
            ))
        })?;
    let later = Transaction::new(
        format!("{}-later", config.transaction_id),
        config.starting_amount,
        later_time,
    );
    debug!(later_date_time = %later.date_time(), "Built later transaction");

    let report = DemoReport {
        later_is_after_original: later.is_after(&original),
        original_is_after_later: original.is_after(&later),
        original_is_after_itself: original.is_after(&original),
        original,
        reduced,
        later,
    };

    info!(
        later_is_after_original = report.later_is_after_original,
        original_is_after_later = report.original_is_after_later,
        "Compared transaction timestamps"
    );

    Ok(report)
}
