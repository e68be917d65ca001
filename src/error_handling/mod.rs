//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, per-check failures)
//! - Categorization of transport errors raised by the HTTP client
//!
//! Check failures are categorized into:
//! - **Assertion failures**: the server answered with the wrong status or headers
//! - **Transport failures**: DNS, connect, TLS, timeout; the server was not reached

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, transport_error};
pub use types::{
    AssertionFailure, CheckError, ConfigError, InitializationError, TransportErrorKind,
};
