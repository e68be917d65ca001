//! Probe runner.
//!
//! This module provides:
//! - The shared transport session ([`ProbeClients`])
//! - The four checks (liveness, HTTP->HTTPS, non-www->www, HSTS)
//! - Sequential execution and the resulting [`ProbeReport`]
//!
//! Checks run one after another on the same clients. A failing check never
//! prevents the next one from running unless fail-fast is requested.

mod checks;
mod hsts;
mod location;
mod request;

use std::time::{Duration, Instant};

use log::{error, info, warn};

use crate::config::{CheckKind, Config, DomainTargets, EXIT_CHECK_FAILED, EXIT_SUCCESS};
use crate::error_handling::{CheckError, InitializationError};
use crate::initialization::{init_client, init_redirect_client};

pub use checks::{check_hsts, check_http_to_https, check_liveness, check_non_www_to_www};
pub use hsts::parse_max_age;
pub use location::{assert_redirect_target, raw_authority};
pub use request::{send_get, ProbeResponse, RedirectMode};

/// Transport session shared by all checks.
///
/// Both clients are configured identically except for redirect handling.
#[derive(Debug, Clone)]
pub struct ProbeClients {
    /// Follows redirects to the final response
    pub follow: reqwest::Client,
    /// Returns the first response, redirect or not
    pub no_follow: reqwest::Client,
}

impl ProbeClients {
    /// Builds both clients from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if either client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            follow: init_client(config)?,
            no_follow: init_redirect_client(config)?,
        })
    }
}

/// Result of one check.
#[derive(Debug)]
pub enum CheckStatus {
    /// Every assertion held
    Passed,
    /// An assertion failed or the target could not be reached
    Failed(CheckError),
    /// Not run because an earlier check failed under fail-fast
    Skipped,
}

/// One check's status and how long it took.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Which check
    pub kind: CheckKind,
    /// What happened
    pub status: CheckStatus,
    /// Wall time spent on the check's requests
    pub elapsed: Duration,
}

impl CheckOutcome {
    /// Returns `true` if the check passed.
    pub fn passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    /// Returns the failure, if the check failed.
    pub fn error(&self) -> Option<&CheckError> {
        match &self.status {
            CheckStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcomes of one probe run, in execution order.
#[derive(Debug)]
pub struct ProbeReport {
    /// Bare domain that was probed
    pub domain: String,
    /// One entry per selected check
    pub outcomes: Vec<CheckOutcome>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ProbeReport {
    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of checks that failed (assertion or transport).
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error().is_some()).count()
    }

    /// Number of checks skipped because of fail-fast.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, CheckStatus::Skipped))
            .count()
    }

    /// `true` only if every selected check ran and passed.
    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            EXIT_SUCCESS
        } else {
            EXIT_CHECK_FAILED
        }
    }
}

/// Runs checks for one domain on a shared transport session.
#[derive(Debug, Clone)]
pub struct ProbeRunner {
    clients: ProbeClients,
    targets: DomainTargets,
}

impl ProbeRunner {
    /// Creates a runner for `targets` using `clients`.
    pub fn new(clients: ProbeClients, targets: DomainTargets) -> Self {
        Self { clients, targets }
    }

    /// Runs a single check and times it.
    pub async fn run_check(&self, kind: CheckKind) -> CheckOutcome {
        let start = Instant::now();
        let result = match kind {
            CheckKind::Liveness => check_liveness(&self.clients, &self.targets).await,
            CheckKind::HttpToHttps => check_http_to_https(&self.clients, &self.targets).await,
            CheckKind::NonWwwToWww => check_non_www_to_www(&self.clients, &self.targets).await,
            CheckKind::Hsts => check_hsts(&self.clients, &self.targets).await,
        };
        let elapsed = start.elapsed();

        let status = match result {
            Ok(()) => {
                info!("Check {} passed in {:.2}s", kind, elapsed.as_secs_f64());
                CheckStatus::Passed
            }
            Err(e) => {
                if e.is_assertion() {
                    warn!("Check {} failed: {}", kind, e);
                } else {
                    error!("Check {} could not complete: {}", kind, e);
                }
                CheckStatus::Failed(e)
            }
        };

        CheckOutcome {
            kind,
            status,
            elapsed,
        }
    }

    /// Runs `kinds` in order.
    ///
    /// With `fail_fast`, the checks after the first failure are recorded as
    /// [`CheckStatus::Skipped`] without sending any request.
    pub async fn run_checks(&self, kinds: &[CheckKind], fail_fast: bool) -> ProbeReport {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(kinds.len());
        let mut stop = false;

        for &kind in kinds {
            if stop {
                outcomes.push(CheckOutcome {
                    kind,
                    status: CheckStatus::Skipped,
                    elapsed: Duration::ZERO,
                });
                continue;
            }
            let outcome = self.run_check(kind).await;
            if fail_fast && !outcome.passed() {
                warn!("Stopping after failed check {} (fail-fast)", kind);
                stop = true;
            }
            outcomes.push(outcome);
        }

        ProbeReport {
            domain: self.targets.non_www_domain.clone(),
            outcomes,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }
}
