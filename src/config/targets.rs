//! Probed URLs derived from the configured domain.

use url::Url;

use crate::config::constants::WWW_PREFIX;
use crate::error_handling::ConfigError;

/// The domain pair under test and the three URLs derived from it.
///
/// Every field is public so tests can point the URLs at a local server while
/// keeping the expected `www` host of the real domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainTargets {
    /// Bare domain, e.g. `example.com`
    pub non_www_domain: String,
    /// `www.` + bare domain; the only host a redirect may point at
    pub www_domain: String,
    /// `http://www.<domain>`
    pub http_www_url: String,
    /// `https://<domain>`
    pub https_non_www_url: String,
    /// `https://www.<domain>`
    pub https_www_url: String,
}

impl DomainTargets {
    /// Builds the targets for a bare domain.
    ///
    /// The input is trimmed, lowercased and stripped of a trailing dot.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the input is empty, carries a scheme, path,
    /// port or credentials, already starts with `www.`, or is not a valid host.
    pub fn new(domain: &str) -> Result<Self, ConfigError> {
        let non_www_domain = normalize_domain(domain)?;
        let www_domain = format!("{WWW_PREFIX}{non_www_domain}");

        Ok(Self {
            http_www_url: format!("http://{www_domain}"),
            https_non_www_url: format!("https://{non_www_domain}"),
            https_www_url: format!("https://{www_domain}"),
            non_www_domain,
            www_domain,
        })
    }
}

fn normalize_domain(raw: &str) -> Result<String, ConfigError> {
    let domain = raw.trim().trim_end_matches('.').to_ascii_lowercase();

    if domain.is_empty() {
        return Err(ConfigError::EmptyDomain);
    }
    if domain.contains("://") {
        return Err(ConfigError::UnexpectedScheme(raw.to_string()));
    }
    if domain.contains(['/', ':', '@', '?', '#']) || domain.chars().any(char::is_whitespace) {
        return Err(ConfigError::NotABareHost(raw.to_string()));
    }
    if domain.starts_with(WWW_PREFIX) {
        return Err(ConfigError::AlreadyWww(raw.to_string()));
    }

    // Let the URL parser decide what a valid host is; it must come back unchanged.
    let parsed = Url::parse(&format!("https://{domain}/"))
        .map_err(|e| ConfigError::InvalidHost(raw.to_string(), e.to_string()))?;
    match parsed.host_str() {
        Some(host) if host == domain => Ok(domain),
        Some(host) => Err(ConfigError::InvalidHost(
            raw.to_string(),
            format!("parses as host {host}"),
        )),
        None => Err(ConfigError::InvalidHost(
            raw.to_string(),
            "no host".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_derived_from_bare_domain() {
        let targets = DomainTargets::new("kouidri.fr").unwrap();
        assert_eq!(targets.non_www_domain, "kouidri.fr");
        assert_eq!(targets.www_domain, "www.kouidri.fr");
        assert_eq!(targets.http_www_url, "http://www.kouidri.fr");
        assert_eq!(targets.https_non_www_url, "https://kouidri.fr");
        assert_eq!(targets.https_www_url, "https://www.kouidri.fr");
    }

    #[test]
    fn test_www_form_is_prefixed_bare_form() {
        for domain in ["example.com", "sub.example.co.uk", "a-b.io"] {
            let targets = DomainTargets::new(domain).unwrap();
            assert_eq!(targets.www_domain, format!("www.{}", targets.non_www_domain));
        }
    }

    #[test]
    fn test_domain_is_normalized() {
        let targets = DomainTargets::new("  Example.COM. ").unwrap();
        assert_eq!(targets.non_www_domain, "example.com");
        assert_eq!(targets.www_domain, "www.example.com");
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(matches!(
            DomainTargets::new("   "),
            Err(ConfigError::EmptyDomain)
        ));
    }

    #[test]
    fn test_domain_with_scheme_rejected() {
        assert!(matches!(
            DomainTargets::new("https://example.com"),
            Err(ConfigError::UnexpectedScheme(_))
        ));
    }

    #[test]
    fn test_domain_with_path_or_port_rejected() {
        assert!(matches!(
            DomainTargets::new("example.com/path"),
            Err(ConfigError::NotABareHost(_))
        ));
        assert!(matches!(
            DomainTargets::new("example.com:8443"),
            Err(ConfigError::NotABareHost(_))
        ));
        assert!(matches!(
            DomainTargets::new("user@example.com"),
            Err(ConfigError::NotABareHost(_))
        ));
    }

    #[test]
    fn test_www_domain_rejected() {
        assert!(matches!(
            DomainTargets::new("www.example.com"),
            Err(ConfigError::AlreadyWww(_))
        ));
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(matches!(
            DomainTargets::new("exa mple.com"),
            Err(ConfigError::NotABareHost(_))
        ));
        assert!(matches!(
            DomainTargets::new("bad%host.com"),
            Err(ConfigError::InvalidHost(_, _))
        ));
    }
}
