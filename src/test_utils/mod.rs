//! Test utilities and mock builders.
//!
//! This module provides defaulted builders for domain values
//! for use in unit and integration tests.

pub mod builders;

pub use builders::{TransactionBuilder, ZonedDateTimeBuilder, transaction, zoned_date_time};
