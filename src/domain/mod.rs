//! Domain layer containing the transaction value type and error definitions.

pub mod error;
pub mod types;

pub use error::{AppError, ConfigError, DomainError};
pub use types::{Amount, Transaction, TransactionId};
