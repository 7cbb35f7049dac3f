//! Mock builders for domain values.
//!
//! Every builder starts out populated with valid "don't care" defaults, so a
//! test only names the fields that matter to the behavior it exercises:
//!
//! ```
//! use transaction_mock_builder::test_utils::{transaction, zoned_date_time};
//!
//! let before = transaction().amount(10).build();
//! let after = transaction().amount(8).build();
//! assert_eq!(before.reduce_by(2), after);
//!
//! let later = transaction().date_time(zoned_date_time().year(2022).build()).build();
//! assert!(later.is_after(&transaction().build()));
//! ```
//!
//! Adding a field to a domain type means adding one defaulted field, one
//! setter and one line in `build()` to its builder. Existing call sites keep
//! compiling and keep their meaning.
//!
//! The defaults below are part of this module's public contract. Tests that
//! rely on a default without overriding it are coupled to its value.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Timelike, Utc};

use crate::domain::{Amount, DomainError, Transaction, TransactionId};

pub const DEFAULT_TRANSACTION_ID: &str = "transaction-id";
pub const DEFAULT_AMOUNT: Amount = 1;

pub const DEFAULT_YEAR: i32 = 2021;
pub const DEFAULT_MONTH: u32 = 1;
pub const DEFAULT_DAY: u32 = 1;
pub const DEFAULT_HOUR: u32 = 0;
pub const DEFAULT_MINUTE: u32 = 0;
pub const DEFAULT_SECOND: u32 = 0;
pub const DEFAULT_NANOSECOND: u32 = 0;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Starts building a zoned date-time from the defaults.
#[must_use]
pub fn zoned_date_time() -> ZonedDateTimeBuilder {
    ZonedDateTimeBuilder::default()
}

/// Starts building a [`Transaction`] from the defaults.
#[must_use]
pub fn transaction() -> TransactionBuilder {
    TransactionBuilder::default()
}

/// Builder for `DateTime<FixedOffset>` values.
///
/// Defaults to midnight on 2021-01-01 in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDateTimeBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    offset: FixedOffset,
}

impl Default for ZonedDateTimeBuilder {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            day: DEFAULT_DAY,
            hour: DEFAULT_HOUR,
            minute: DEFAULT_MINUTE,
            second: DEFAULT_SECOND,
            nanosecond: DEFAULT_NANOSECOND,
            offset: Utc.fix(),
        }
    }
}

impl ZonedDateTimeBuilder {
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    #[must_use]
    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    #[must_use]
    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    #[must_use]
    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    #[must_use]
    pub fn second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    #[must_use]
    pub fn nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = nanosecond;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Builds the date-time.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimestamp`] if the overridden fields do
    /// not name a real calendar date and time. Leap seconds (a nanosecond of
    /// one billion or more) are rejected.
    pub fn try_build(&self) -> Result<DateTime<FixedOffset>, DomainError> {
        self.offset
            .with_ymd_and_hms(
                self.year,
                self.month,
                self.day,
                self.hour,
                self.minute,
                self.second,
            )
            .single()
            // chrono reads 1e9..2e9 as a leap second; those are not plain times
            .filter(|_| self.nanosecond < NANOS_PER_SECOND)
            .and_then(|date_time| date_time.with_nanosecond(self.nanosecond))
            .ok_or_else(|| {
                DomainError::InvalidTimestamp(format!(
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}{}",
                    self.year,
                    self.month,
                    self.day,
                    self.hour,
                    self.minute,
                    self.second,
                    self.nanosecond,
                    self.offset,
                ))
            })
    }

    /// Builds the date-time.
    ///
    /// # Panics
    ///
    /// Panics if an override produced an impossible date or time, such as
    /// month 13. The defaults always build.
    #[must_use]
    pub fn build(self) -> DateTime<FixedOffset> {
        match self.try_build() {
            Ok(date_time) => date_time,
            Err(err) => panic!("zoned_date_time builder: {err}"),
        }
    }
}

/// Builder for [`Transaction`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBuilder {
    id: TransactionId,
    amount: Amount,
    date_time: DateTime<FixedOffset>,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_TRANSACTION_ID.to_string(),
            amount: DEFAULT_AMOUNT,
            date_time: zoned_date_time().build(),
        }
    }
}

impl TransactionBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<TransactionId>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn date_time(mut self, date_time: DateTime<FixedOffset>) -> Self {
        self.date_time = date_time;
        self
    }

    #[must_use]
    pub fn build(self) -> Transaction {
        Transaction::new(self.id, self.amount, self.date_time)
    }
}
