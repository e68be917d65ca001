//! Configuration constants.
//!
//! This module defines the defaults and fixed values used throughout the probe:
//! the target domain, the request timeout and the status codes each check
//! asserts on.

/// Bare (non-`www`) domain probed when neither `--domain` nor `PROBE_DOMAIN` is set.
pub const NON_WWW_DOMAIN: &str = "kouidri.fr";

/// Prefix that turns the bare domain into its `www` form.
pub const WWW_PREFIX: &str = "www.";

/// Environment variable that overrides the probed domain.
pub const DOMAIN_ENV_VAR: &str = "PROBE_DOMAIN";

// Network operation timeouts
/// Per-request timeout in seconds (covers connect, TLS handshake and response headers)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum redirect hops the redirect-following client will take.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Status codes asserted by the checks
/// 200 OK
pub const HTTP_STATUS_OK: u16 = 200;
/// 301 Moved Permanently. The redirect checks accept this code and nothing else.
pub const HTTP_STATUS_MOVED_PERMANENTLY: u16 = 301;

/// Scheme every redirect must land on.
pub const EXPECTED_REDIRECT_SCHEME: &str = "https";
/// Path every redirect of a root request must land on.
pub const EXPECTED_REDIRECT_PATH: &str = "/";

// Process exit codes
/// Every selected check passed.
pub const EXIT_SUCCESS: i32 = 0;
/// The run could not start (bad configuration, client setup failure).
pub const EXIT_RUN_ERROR: i32 = 1;
/// At least one check failed.
pub const EXIT_CHECK_FAILED: i32 = 2;
