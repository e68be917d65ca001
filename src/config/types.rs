//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DOMAIN_ENV_VAR, NON_WWW_DOMAIN};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// The independent checks the probe can run.
///
/// Declaration order is the default execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIterMacro)]
pub enum CheckKind {
    /// `https://www.<domain>` answers 200 after redirects
    Liveness,
    /// `http://www.<domain>` answers 301 to `https://www.<domain>/`
    HttpToHttps,
    /// `https://<domain>` answers 301 to `https://www.<domain>/`
    NonWwwToWww,
    /// HSTS absent over plain HTTP, present with `max-age` over HTTPS
    Hsts,
}

impl CheckKind {
    /// Returns the kebab-case name used on the command line and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Liveness => "liveness",
            CheckKind::HttpToHttps => "http-to-https",
            CheckKind::NonWwwToWww => "non-www-to-www",
            CheckKind::Hsts => "hsts",
        }
    }

    /// All checks, in default execution order.
    pub fn all() -> Vec<CheckKind> {
        use strum::IntoEnumIterator;
        CheckKind::iter().collect()
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through [`Opt`].
///
/// # Examples
///
/// ```no_run
/// use domain_probe::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bare (non-`www`) domain to probe
    pub domain: String,

    /// Checks to run, in order. Empty means all of them.
    pub checks: Vec<CheckKind>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Stop after the first failing check
    pub fail_fast: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: NON_WWW_DOMAIN.to_string(),
            checks: Vec::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            fail_fast: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Returns the checks to run, expanding an empty selection to all checks.
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn selected_checks(&self) -> Vec<CheckKind> {
        if self.checks.is_empty() {
            return CheckKind::all();
        }
        let mut selected = Vec::with_capacity(self.checks.len());
        for kind in &self.checks {
            if !selected.contains(kind) {
                selected.push(*kind);
            }
        }
        selected
    }
}

/// Command-line options for the `domain_probe` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_probe",
    version,
    about = "Checks a domain's HTTP->HTTPS and non-www->www redirects and its HSTS header"
)]
pub struct Opt {
    /// Bare domain to probe (the www form is derived by prefixing "www.")
    #[arg(long, env = DOMAIN_ENV_VAR, default_value = NON_WWW_DOMAIN)]
    pub domain: String,

    /// Check to run (repeatable). Runs every check when omitted.
    #[arg(long = "check", value_enum)]
    pub checks: Vec<CheckKind>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Stop after the first failing check
    #[arg(long)]
    pub fail_fast: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            checks: opt.checks,
            timeout_seconds: opt.timeout_seconds,
            fail_fast: opt.fail_fast,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_check_kind_default_order() {
        assert_eq!(
            CheckKind::all(),
            vec![
                CheckKind::Liveness,
                CheckKind::HttpToHttps,
                CheckKind::NonWwwToWww,
                CheckKind::Hsts,
            ]
        );
    }

    #[test]
    fn test_check_kind_names_match_value_enum() {
        // The report uses as_str(); the CLI uses clap's derived names. Keep them in sync.
        for kind in CheckKind::all() {
            let value = kind.to_possible_value().expect("no skipped variants");
            assert_eq!(value.get_name(), kind.as_str());
        }
    }

    #[test]
    fn test_selected_checks_empty_means_all() {
        let config = Config::default();
        assert_eq!(config.selected_checks(), CheckKind::all());
    }

    #[test]
    fn test_selected_checks_deduplicates_preserving_order() {
        let config = Config {
            checks: vec![CheckKind::Hsts, CheckKind::Liveness, CheckKind::Hsts],
            ..Default::default()
        };
        assert_eq!(
            config.selected_checks(),
            vec![CheckKind::Hsts, CheckKind::Liveness]
        );
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.domain, NON_WWW_DOMAIN);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert!(!config.fail_fast);
        assert_eq!(config.log_format, LogFormat::Plain);
    }
}
