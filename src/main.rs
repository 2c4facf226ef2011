//! endpoint-check - Main entry point
//!
//! Reads endpoint records from stdin and prints their normalized rendering.
//! Exits with a non-zero status if any record is invalid.

use anyhow::Result;
use mail_endpoint::{Config, EndpointChecker};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries just the report)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Checking endpoints with {:?} output", config.output_format);

    let checker = EndpointChecker::new(config.output_format);
    let summary = match checker.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Endpoint check failed: {}", e);
            return Err(e);
        }
    };

    if summary.all_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
