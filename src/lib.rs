//! domain_probe library: black-box checks of a domain's HTTPS posture
//!
//! This library sends a handful of GET requests to a domain and its `www`
//! form and verifies:
//! - `https://www.<domain>` is up (200 after redirects)
//! - `http://www.<domain>` permanently redirects to `https://www.<domain>/`
//! - `https://<domain>` permanently redirects to `https://www.<domain>/`
//! - HSTS is absent over plain HTTP and present with `max-age` over HTTPS
//!
//! # Example
//!
//! ```no_run
//! use domain_probe::{run_probe, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_probe(config).await?;
//! println!("{} passed, {} failed", report.passed(), report.failed());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Checks are awaited one after another;
//! nothing runs concurrently.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod probe;

// Re-export public API
pub use config::{CheckKind, Config, DomainTargets, LogFormat, LogLevel, Opt};
pub use probe::{CheckOutcome, CheckStatus, ProbeClients, ProbeReport, ProbeRunner};
pub use run::run_probe;

// Internal run module (builds the session and drives the checks)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, DomainTargets};
    use crate::probe::{ProbeClients, ProbeReport, ProbeRunner};

    /// Runs the selected checks against the configured domain.
    ///
    /// This is the main entry point for the library. It validates the domain,
    /// builds the shared HTTP clients and runs each selected check in order.
    /// Check failures are recorded in the returned report, not returned as
    /// errors.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configured domain is not a valid bare host name
    /// - The HTTP clients cannot be built
    pub async fn run_probe(config: Config) -> Result<ProbeReport> {
        let targets = DomainTargets::new(&config.domain).context("Invalid domain configuration")?;
        let clients =
            ProbeClients::from_config(&config).context("Failed to initialize HTTP clients")?;

        let checks = config.selected_checks();
        info!(
            "Probing {} / {} ({} check{})",
            targets.non_www_domain,
            targets.www_domain,
            checks.len(),
            if checks.len() == 1 { "" } else { "s" }
        );

        let runner = ProbeRunner::new(clients, targets);
        Ok(runner.run_checks(&checks, config.fail_fast).await)
    }
}
