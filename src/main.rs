use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::info;

use transaction_mock_builder::app::{DemoConfig, run_demo};
use transaction_mock_builder::infra::init_tracing;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = DemoConfig::from_env().context("Failed to load demo configuration")?;

    init_tracing(config.log_format, &config.log_filter)
        .context("Failed to initialize logging")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_format = %config.log_format,
        "Starting transaction demo"
    );

    let report = run_demo(&config).context("Demo run failed")?;

    println!("{}", report.to_json()?);

    Ok(())
}
