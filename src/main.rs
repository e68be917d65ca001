//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_probe` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and the exit code
//!
//! All core functionality is implemented in the library crate.

use clap::Parser;
use std::process;

use domain_probe::app::{print_failure_statistics, print_report};
use domain_probe::config::EXIT_RUN_ERROR;
use domain_probe::initialization::{init_crypto_provider, init_logger_with};
use domain_probe::{run_probe, Config, Opt};

#[tokio::main]
async fn main() {
    // A .env next to the working directory may set PROBE_DOMAIN
    let _ = dotenvy::dotenv();

    let config: Config = Opt::parse().into();

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone()) {
        eprintln!("domain_probe error: {e}");
        process::exit(EXIT_RUN_ERROR);
    }

    // Must happen before the first TLS connection
    init_crypto_provider();

    match run_probe(config).await {
        Ok(report) => {
            print_failure_statistics(&report);
            print_report(&report);
            process::exit(report.exit_code());
        }
        Err(e) => {
            eprintln!("domain_probe error: {:#}", e);
            process::exit(EXIT_RUN_ERROR);
        }
    }
}
