//! Infrastructure layer.

pub mod observability;

pub use observability::{LogFormat, ObservabilityError, init_tracing};
