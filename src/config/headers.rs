//! HTTP header name constants.
//!
//! Header lookups go through `reqwest::header::HeaderMap`, which matches names
//! case-insensitively, so the canonical spelling is used here for messages.

/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// Redirect target header
pub const HEADER_LOCATION: &str = "Location";

/// HSTS directive that must be present in the header value.
pub const HSTS_MAX_AGE_DIRECTIVE: &str = "max-age";
