use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Represents a unique identifier for a transaction.
pub type TransactionId = String;

/// Represents a transaction amount in minor units.
pub type Amount = i64;

/// Core domain value representing a single transaction.
///
/// A `Transaction` is immutable: there are no setters, and every operation
/// that "changes" it returns a new instance while leaving the receiver as it
/// was.
///
/// Equality is structural. Two transactions are equal when their ids,
/// amounts, instants and UTC offsets all match, so the same instant recorded
/// under two different offsets compares unequal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Amount,
    date_time: DateTime<FixedOffset>,
}

impl Transaction {
    pub fn new(
        id: impl Into<TransactionId>,
        amount: Amount,
        date_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            date_time,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date_time(&self) -> DateTime<FixedOffset> {
        self.date_time
    }

    /// Returns a copy of this transaction with `amount` subtracted.
    ///
    /// No bounds checking: negative results are allowed and the subtraction
    /// wraps at the bounds of [`Amount`], so this never panics. Use
    /// [`Transaction::checked_reduce_by`] to detect overflow.
    #[must_use]
    pub fn reduce_by(&self, amount: Amount) -> Self {
        Self {
            amount: self.amount.wrapping_sub(amount),
            ..self.clone()
        }
    }

    /// Like [`Transaction::reduce_by`], but reports overflow instead of
    /// wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::AmountOverflow`] if the difference does not fit
    /// in an [`Amount`].
    pub fn checked_reduce_by(&self, amount: Amount) -> Result<Self, DomainError> {
        let reduced = self
            .amount
            .checked_sub(amount)
            .ok_or(DomainError::AmountOverflow {
                amount: self.amount,
                reduce_by: amount,
            })?;

        Ok(Self {
            amount: reduced,
            ..self.clone()
        })
    }

    /// Returns true if this transaction happened strictly after `other`.
    ///
    /// Instants are compared in UTC, so offsets never affect the result.
    pub fn is_after(&self, other: &Transaction) -> bool {
        self.date_time > other.date_time
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        // chrono's DateTime equality ignores the offset
        self.id == other.id
            && self.amount == other.amount
            && self.date_time == other.date_time
            && self.date_time.offset() == other.date_time.offset()
    }
}

impl Eq for Transaction {}
