//! HTTP client initialization.
//!
//! This module builds the transport session shared by every check: one client
//! that follows redirects and one that stops at the first response. Both carry
//! the same timeout and TLS settings.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};

/// Common builder settings for both clients.
///
/// - Timeout from config
/// - Rustls TLS backend with certificate verification always on
/// - No custom default headers
fn base_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .use_rustls_tls()
        .danger_accept_invalid_certs(false)
        .timeout(Duration::from_secs(config.timeout_seconds))
}

/// Initializes the HTTP client used when redirects should be followed.
///
/// Follows up to `MAX_REDIRECT_HOPS` redirects.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    base_builder(config)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()
}

/// Initializes the HTTP client used to inspect a redirect response itself.
///
/// Redirects are disabled so the caller sees the first hop's status and
/// `Location` header.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    base_builder(config)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
