//! `Strict-Transport-Security` header checks.

use crate::config::{HEADER_STRICT_TRANSPORT_SECURITY, HSTS_MAX_AGE_DIRECTIVE};
use crate::error_handling::AssertionFailure;

use super::request::ProbeResponse;

/// A plaintext response must not advertise HSTS.
pub fn assert_hsts_absent(resp: &ProbeResponse) -> Result<(), AssertionFailure> {
    match resp.header_value(HEADER_STRICT_TRANSPORT_SECURITY) {
        None => Ok(()),
        Some(value) => Err(AssertionFailure::new(
            "Strict-Transport-Security over HTTP",
            value,
            "absent",
        )
        .with_note("HSTS must only be sent over HTTPS")),
    }
}

/// An HTTPS response must carry HSTS with a `max-age` directive.
///
/// Returns the header value on success.
pub fn assert_hsts_present(resp: &ProbeResponse) -> Result<String, AssertionFailure> {
    let value = resp
        .header_value(HEADER_STRICT_TRANSPORT_SECURITY)
        .ok_or_else(|| {
            AssertionFailure::new(HEADER_STRICT_TRANSPORT_SECURITY, "absent", "present")
        })?;

    if !value.to_ascii_lowercase().contains(HSTS_MAX_AGE_DIRECTIVE) {
        return Err(AssertionFailure::new(
            "Strict-Transport-Security value",
            format!("{value:?}"),
            format!("a {HSTS_MAX_AGE_DIRECTIVE} directive"),
        ));
    }

    Ok(value)
}

/// Extracts the `max-age` seconds from an HSTS header value.
///
/// Directive names are case-insensitive and the value may be quoted. Returns
/// `None` if the directive is missing or its value is not a number.
pub fn parse_max_age(value: &str) -> Option<u64> {
    value.split([';', ',']).find_map(|directive| {
        let (name, raw) = directive.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case(HSTS_MAX_AGE_DIRECTIVE) {
            return None;
        }
        raw.trim().trim_matches('"').parse().ok()
    })
}
