//! `Location` header validation for the redirect checks.
//!
//! The scheme is read from the parsed URL. Authority and path are compared on
//! the header text as sent: the URL parser lowercases hosts, drops default
//! ports and fills in an empty path, and none of that is accepted here.

use reqwest::Url;

use crate::config::{EXPECTED_REDIRECT_PATH, EXPECTED_REDIRECT_SCHEME, HEADER_LOCATION};
use crate::error_handling::AssertionFailure;

/// Splits a raw absolute URL into its authority and path, as written.
///
/// The authority is the text between `://` and the first `/`, `?` or `#`;
/// the path runs from there to the first `?` or `#`. Returns `None` if the
/// text has no `://`.
pub fn raw_authority(location: &str) -> Option<(&str, &str)> {
    let (_, rest) = location.split_once("://")?;
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    Some((authority, &tail[..path_end]))
}

/// Checks that a redirect's `Location` is exactly `https://<expected_authority>/`.
///
/// `host_note` explains the host expectation in the failure message (for
/// example whether `www` must be preserved or added). A query or fragment
/// after the path is not inspected.
///
/// # Errors
///
/// Returns the first [`AssertionFailure`] among: not an absolute URL, scheme
/// not `https`, authority not byte-for-byte `expected_authority`, path not `/`.
pub fn assert_redirect_target(
    location: &str,
    expected_authority: &str,
    host_note: &'static str,
) -> Result<Url, AssertionFailure> {
    let parsed = Url::parse(location).map_err(|e| {
        AssertionFailure::new(
            "Location",
            format!("{location:?} ({e})"),
            format!("an absolute {EXPECTED_REDIRECT_SCHEME} URL"),
        )
    })?;

    if parsed.scheme() != EXPECTED_REDIRECT_SCHEME {
        return Err(AssertionFailure::new(
            "Location scheme",
            parsed.scheme(),
            EXPECTED_REDIRECT_SCHEME,
        )
        .with_note("redirect must land on HTTPS"));
    }

    let (authority, path) = raw_authority(location).unwrap_or(("", ""));
    if authority != expected_authority {
        return Err(
            AssertionFailure::new("Location host", authority, expected_authority)
                .with_note(host_note),
        );
    }

    if path != EXPECTED_REDIRECT_PATH {
        return Err(AssertionFailure::new(
            "Location path",
            format!("{path:?}"),
            format!("{EXPECTED_REDIRECT_PATH:?}"),
        )
        .with_note("root request must redirect to root"));
    }

    Ok(parsed)
}

/// Failure for a redirect without a `Location` header.
pub fn missing_location() -> AssertionFailure {
    AssertionFailure::new(HEADER_LOCATION, "absent", "present")
}
