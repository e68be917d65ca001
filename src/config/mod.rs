//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default domain, timeouts, expected status codes)
//! - HTTP header name constants
//! - CLI option types and parsing
//! - Derivation of the probed URLs from the configured domain

mod constants;
mod headers;
mod targets;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use targets::DomainTargets;
pub use types::{CheckKind, Config, LogFormat, LogLevel, Opt};
