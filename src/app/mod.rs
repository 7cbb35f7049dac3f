//! Application layer containing configuration and the demo run.

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::{DemoReport, run_demo};
