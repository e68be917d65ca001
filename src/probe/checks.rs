//! The four posture checks.
//!
//! Each check is a linear sequence of requests and assertions; the first unmet
//! assertion ends it. No check depends on another having run.

use log::info;

use crate::config::{
    DomainTargets, HEADER_LOCATION, HTTP_STATUS_MOVED_PERMANENTLY, HTTP_STATUS_OK,
};
use crate::error_handling::{AssertionFailure, CheckError};

use super::hsts::{assert_hsts_absent, assert_hsts_present, parse_max_age};
use super::location::{assert_redirect_target, missing_location};
use super::request::{send_get, ProbeResponse, RedirectMode};
use super::ProbeClients;

fn assert_status(
    resp: &ProbeResponse,
    expected: u16,
    note: Option<&'static str>,
) -> Result<(), AssertionFailure> {
    let actual = resp.status.as_u16();
    if actual == expected {
        return Ok(());
    }
    let failure = AssertionFailure::new("status code", actual.to_string(), expected.to_string());
    Err(match note {
        Some(note) => failure.with_note(note),
        None => failure,
    })
}

/// Shared body of the two redirect checks: strict 301, `Location` present and
/// pointing at `https://<www domain>/`.
async fn check_permanent_redirect(
    clients: &ProbeClients,
    url: &str,
    targets: &DomainTargets,
    host_note: &'static str,
) -> Result<String, CheckError> {
    let resp = send_get(clients, url, RedirectMode::Inspect).await?;

    assert_status(
        &resp,
        HTTP_STATUS_MOVED_PERMANENTLY,
        Some("permanent redirect only"),
    )?;

    let location = resp
        .header_value(HEADER_LOCATION)
        .ok_or_else(missing_location)?;

    assert_redirect_target(&location, &targets.www_domain, host_note)?;
    Ok(location)
}

/// `GET https://www.<D>` following redirects must end in 200.
pub async fn check_liveness(
    clients: &ProbeClients,
    targets: &DomainTargets,
) -> Result<(), CheckError> {
    let resp = send_get(clients, &targets.https_www_url, RedirectMode::Follow).await?;
    assert_status(&resp, HTTP_STATUS_OK, None)?;
    info!("{} is up ({})", targets.https_www_url, resp.final_url);
    Ok(())
}

/// `GET http://www.<D>` must answer 301 to `https://www.<D>/`, keeping `www`.
pub async fn check_http_to_https(
    clients: &ProbeClients,
    targets: &DomainTargets,
) -> Result<(), CheckError> {
    let location = check_permanent_redirect(
        clients,
        &targets.http_www_url,
        targets,
        "www must be preserved",
    )
    .await?;
    info!(
        "HTTP->HTTPS redirect successful: {} -> {}",
        targets.http_www_url, location
    );
    Ok(())
}

/// `GET https://<D>` must answer 301 to `https://www.<D>/`, adding `www`.
pub async fn check_non_www_to_www(
    clients: &ProbeClients,
    targets: &DomainTargets,
) -> Result<(), CheckError> {
    let location = check_permanent_redirect(
        clients,
        &targets.https_non_www_url,
        targets,
        "www must be added",
    )
    .await?;
    info!(
        "Non-www->www redirect successful: {} -> {}",
        targets.https_non_www_url, location
    );
    Ok(())
}

/// HSTS must be absent on the first plaintext hop of `http://www.<D>` and
/// present, with `max-age`, on the final 200 of `https://www.<D>`.
///
/// Only the first hop of the plaintext request is inspected; later hops of
/// the chain are already on HTTPS.
pub async fn check_hsts(clients: &ProbeClients, targets: &DomainTargets) -> Result<(), CheckError> {
    let http_resp = send_get(clients, &targets.http_www_url, RedirectMode::Inspect).await?;
    assert_hsts_absent(&http_resp)?;

    let https_resp = send_get(clients, &targets.https_www_url, RedirectMode::Follow).await?;
    assert_status(&https_resp, HTTP_STATUS_OK, None)?;
    let value = assert_hsts_present(&https_resp)?;

    match parse_max_age(&value) {
        Some(secs) => info!(
            "HSTS on {}: {:?} (max-age {} days)",
            https_resp.final_url,
            value,
            secs / 86_400
        ),
        None => info!("HSTS on {}: {:?}", https_resp.final_url, value),
    }
    Ok(())
}
