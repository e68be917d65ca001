// Shared test helpers for running checks against a local mock server.
//
// The mock server only speaks plain HTTP, so the three probed URLs are pointed
// at paths on it while the expected www host stays that of a fictional domain.
// Redirect checks never follow the Location they inspect, so it can name a
// host that does not resolve.

use domain_probe::{Config, DomainTargets, ProbeClients};
use httptest::Server;

/// Bare domain the mock server pretends to be.
#[allow(dead_code)]
pub const MOCK_DOMAIN: &str = "example.test";
/// Its www form.
#[allow(dead_code)]
pub const MOCK_WWW_DOMAIN: &str = "www.example.test";
/// The Location a correctly configured server returns.
#[allow(dead_code)]
pub const GOOD_LOCATION: &str = "https://www.example.test/";
/// A typical HSTS value.
#[allow(dead_code)]
pub const GOOD_HSTS: &str = "max-age=31536000; includeSubDomains";

/// Path serving the role of `https://www.<domain>`.
pub const WWW_PATH: &str = "/www";
/// Path serving the role of `http://www.<domain>`.
pub const HTTP_WWW_PATH: &str = "/http-www";
/// Path serving the role of `https://<domain>`.
pub const NON_WWW_PATH: &str = "/non-www";

/// Targets whose URLs point at `server`.
#[allow(dead_code)]
pub fn mock_targets(server: &Server) -> DomainTargets {
    DomainTargets {
        non_www_domain: MOCK_DOMAIN.to_string(),
        www_domain: MOCK_WWW_DOMAIN.to_string(),
        http_www_url: server.url(HTTP_WWW_PATH).to_string(),
        https_non_www_url: server.url(NON_WWW_PATH).to_string(),
        https_www_url: server.url(WWW_PATH).to_string(),
    }
}

/// Targets whose URLs all point at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_targets() -> DomainTargets {
    DomainTargets {
        non_www_domain: MOCK_DOMAIN.to_string(),
        www_domain: MOCK_WWW_DOMAIN.to_string(),
        http_www_url: "http://127.0.0.1:1/http-www".to_string(),
        https_non_www_url: "http://127.0.0.1:1/non-www".to_string(),
        https_www_url: "http://127.0.0.1:1/www".to_string(),
    }
}

/// Clients with a short timeout so a broken test fails fast.
#[allow(dead_code)]
pub fn test_clients() -> ProbeClients {
    let config = Config {
        timeout_seconds: 5,
        ..Default::default()
    };
    ProbeClients::from_config(&config).expect("Failed to build test clients")
}
