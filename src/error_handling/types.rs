//! Error type definitions.
//!
//! This module defines all error types used throughout the application. Check
//! failures come in two kinds that are never conflated: an [`AssertionFailure`]
//! means the server answered but answered wrong, a transport error means it
//! could not be reached or the exchange itself failed.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for an invalid domain configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No domain was given.
    #[error("Domain is empty")]
    EmptyDomain,

    /// A URL was given where a bare domain was expected.
    #[error("Domain {0:?} must not include a scheme (pass e.g. example.com)")]
    UnexpectedScheme(String),

    /// The domain carries a path, port, credentials or whitespace.
    #[error("Domain {0:?} must be a bare host name without path, port or credentials")]
    NotABareHost(String),

    /// The `www` form is derived; the bare form must be configured.
    #[error("Domain {0:?} already starts with \"www.\"; configure the bare domain instead")]
    AlreadyWww(String),

    /// The URL parser rejected or rewrote the host.
    #[error("Domain {0:?} is not a valid host name: {1}")]
    InvalidHost(String, String),
}

/// A response property that differs from what the check expects.
///
/// Carries the observed and expected values so the report can show both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// What was inspected, e.g. "status code" or "Location host"
    pub field: &'static str,
    /// Observed value, rendered for display
    pub actual: String,
    /// Expected value, rendered for display
    pub expected: String,
    /// Why the expectation holds, e.g. "permanent redirect only"
    pub note: Option<&'static str>,
}

impl AssertionFailure {
    /// Creates a failure without a note.
    pub fn new(field: &'static str, actual: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field,
            actual: actual.into(),
            expected: expected.into(),
            note: None,
        }
    }

    /// Attaches an explanatory note shown after the expected value.
    pub fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

impl std::fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: got {}, expected {}",
            self.field, self.actual, self.expected
        )?;
        if let Some(note) = self.note {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {}

/// Transport-level failure categories.
///
/// Derived from `reqwest::Error` so the report can say *why* a target was
/// unreachable without dumping the whole error chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// Request or connect timeout
    Timeout,
    /// DNS failure, connection refused, TLS handshake or certificate failure
    Connect,
    /// Redirect loop or too many redirects
    Redirect,
    /// The request could not be sent
    Request,
    /// The response body could not be read
    Body,
    /// The request could not be built (e.g. malformed URL)
    Builder,
    /// Anything else
    Other,
}

impl TransportErrorKind {
    /// Returns a short human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connection/TLS error",
            TransportErrorKind::Redirect => "redirect error",
            TransportErrorKind::Request => "request error",
            TransportErrorKind::Body => "body error",
            TransportErrorKind::Builder => "request builder error",
            TransportErrorKind::Other => "transport error",
        }
    }
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single check did not pass.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The server answered, but not as expected.
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),

    /// The request never produced a usable response.
    #[error("{kind} requesting {url}: {source}")]
    Transport {
        /// Category of the failure
        kind: TransportErrorKind,
        /// URL that was being requested
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}

impl CheckError {
    /// Returns `true` for assertion failures, `false` for transport failures.
    pub fn is_assertion(&self) -> bool {
        matches!(self, CheckError::Assertion(_))
    }
}
