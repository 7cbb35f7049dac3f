//! Transaction Mock Builder
//!
//! An immutable transaction value type paired with defaulted builders
//! for constructing test fixtures.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Application Layer              │
//! │      Demo configuration and demo run         │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │     Transaction value type and errors        │
//! ├─────────────────────────────────────────────┤
//! │                  Test Utils                  │
//! │   Mock builders with per-field defaults      │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │          Structured logging setup            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Immutable values**: operations return new instances instead of mutating
//! - **Mock builders**: every field has a valid default, so tests only name what they exercise
//! - **Composable defaults**: the transaction builder takes its timestamp default from the date-time builder
//! - **Error handling**: `thiserror` enums at the edges, total functions in the core
//! - **Logging**: Structured logging with `tracing`
//!
//! # Example
//!
//! ```
//! use transaction_mock_builder::test_utils::{transaction, zoned_date_time};
//!
//! let reduced = transaction().amount(10).build().reduce_by(2);
//! assert_eq!(reduced, transaction().amount(8).build());
//!
//! let earlier = transaction().date_time(zoned_date_time().year(2021).build()).build();
//! let later = transaction().date_time(zoned_date_time().year(2022).build()).build();
//! assert!(later.is_after(&earlier));
//! assert!(!earlier.is_after(&later));
//! ```

pub mod app;
pub mod domain;
pub mod infra;

// Builders are on by default; disable `test-utils` to leave them out
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
