//! Single GET round-trip.
//!
//! One [`ProbeResponse`] is produced per request and dropped after the
//! assertions on it have run.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};

use crate::error_handling::{transport_error, CheckError};

use super::ProbeClients;

/// Whether the request is allowed to follow redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// Follow redirects to the final response
    Follow,
    /// Stop at the first response, even if it is a redirect
    Inspect,
}

impl RedirectMode {
    /// The client of `clients` that implements this mode.
    pub fn client(self, clients: &ProbeClients) -> &reqwest::Client {
        match self {
            RedirectMode::Follow => &clients.follow,
            RedirectMode::Inspect => &clients.no_follow,
        }
    }
}

/// The observable result of one GET.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// Status of the response that was returned
    pub status: StatusCode,
    /// Headers of the response that was returned
    pub headers: HeaderMap,
    /// URL of the response that was returned (differs from the requested one
    /// only when redirects were followed)
    pub final_url: Url,
}

impl ProbeResponse {
    /// Returns all values of a header joined with `", "`, or `None` if absent.
    ///
    /// Values that are not visible ASCII are rendered lossily rather than dropped.
    pub fn header_value(&self, name: &str) -> Option<String> {
        let values: Vec<String> = self
            .headers
            .get_all(name)
            .iter()
            .map(render_header_value)
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

fn render_header_value(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
    }
}

/// Sends a GET to `url` and collects status, headers and final URL.
///
/// The client is chosen from `mode`, so an inspecting request can never
/// follow a redirect. The body is read to completion so the connection can
/// be reused.
///
/// # Errors
///
/// Returns [`CheckError::Transport`] if the request fails or the body cannot
/// be read. A non-2xx status is *not* an error here.
pub async fn send_get(
    clients: &ProbeClients,
    url: &str,
    mode: RedirectMode,
) -> Result<ProbeResponse, CheckError> {
    debug!("GET {} ({:?})", url, mode);

    let resp = mode
        .client(clients)
        .get(url)
        .send()
        .await
        .map_err(|e| transport_error(url, e))?;

    let status = resp.status();
    let headers = resp.headers().clone();
    let final_url = resp.url().clone();

    let body = resp.bytes().await.map_err(|e| transport_error(url, e))?;
    debug!(
        "GET {} -> {} from {} ({} header(s), {} body bytes)",
        url,
        status.as_u16(),
        final_url,
        headers.len(),
        body.len()
    );

    Ok(ProbeResponse {
        status,
        headers,
        final_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use reqwest::header::HeaderName;

    fn response_with_headers(pairs: &[(&'static str, &'static str)]) -> ProbeResponse {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.append(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        ProbeResponse {
            status: StatusCode::OK,
            headers,
            final_url: Url::parse("https://www.example.com/").unwrap(),
        }
    }

    fn clients() -> ProbeClients {
        ProbeClients::from_config(&Config {
            timeout_seconds: 5,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_header_value_is_case_insensitive() {
        let resp = response_with_headers(&[("strict-transport-security", "max-age=60")]);
        assert_eq!(
            resp.header_value("Strict-Transport-Security").as_deref(),
            Some("max-age=60")
        );
    }

    #[test]
    fn test_header_value_joins_repeated_headers() {
        let resp = response_with_headers(&[
            ("strict-transport-security", "max-age=60"),
            ("strict-transport-security", "includeSubDomains"),
        ]);
        assert_eq!(
            resp.header_value("strict-transport-security").as_deref(),
            Some("max-age=60, includeSubDomains")
        );
    }

    #[test]
    fn test_header_value_missing() {
        let resp = response_with_headers(&[]);
        assert_eq!(resp.header_value("location"), None);
    }

    #[tokio::test]
    async fn test_inspect_mode_returns_first_hop() {
        let server = Server::run();
        let target = server.url("/final").to_string();
        server.expect(
            Expectation::matching(request::method_path("GET", "/start"))
                .respond_with(status_code(301).insert_header("Location", target)),
        );

        let url = server.url("/start").to_string();
        let resp = send_get(&clients(), &url, RedirectMode::Inspect)
            .await
            .unwrap();
        assert_eq!(resp.status.as_u16(), 301);
        assert_eq!(resp.final_url.as_str(), url);
    }

    #[tokio::test]
    async fn test_follow_mode_reaches_final_response() {
        let server = Server::run();
        let target = server.url("/final").to_string();
        server.expect(
            Expectation::matching(request::method_path("GET", "/start"))
                .respond_with(status_code(301).insert_header("Location", target.clone())),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/final"))
                .respond_with(status_code(200)),
        );

        let url = server.url("/start").to_string();
        let resp = send_get(&clients(), &url, RedirectMode::Follow)
            .await
            .unwrap();
        assert_eq!(resp.status.as_u16(), 200);
        assert_eq!(resp.final_url.as_str(), target);
    }
}
