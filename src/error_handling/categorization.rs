//! Transport error categorization.
//!
//! This module maps `reqwest::Error` values onto [`TransportErrorKind`] and wraps
//! them into [`CheckError`] with the URL that was being requested.

use super::types::{CheckError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Order matters: a connect timeout reports both `is_timeout()` and
/// `is_connect()`, and connect failures also report `is_request()`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `TransportErrorKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_body() || error.is_decode() {
        TransportErrorKind::Body
    } else if error.is_request() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    }
}

/// Wraps a client error for `url` into a categorized [`CheckError::Transport`].
pub fn transport_error(url: &str, error: reqwest::Error) -> CheckError {
    CheckError::Transport {
        kind: categorize_reqwest_error(&error),
        url: url.to_string(),
        source: error,
    }
}
