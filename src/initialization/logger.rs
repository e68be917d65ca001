//! Logger initialization.
//!
//! Check results are also printed to stdout by `app::statistics`; the log
//! carries per-request detail and the observed redirects and HSTS values.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Installs the global `env_logger` for the probe.
///
/// `RUST_LOG` is parsed first, then `level` becomes the default and the level
/// for `domain_probe` itself. The HTTP stack (`reqwest`, `hyper`,
/// `hyper_util`, `rustls`) is capped at Info so a `--log-level debug` run
/// shows this crate's request lines without connection-pool chatter.
/// `RUST_LOG` directives for those modules and for `domain_probe` are
/// replaced; directives for any other module still apply.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Request and response lines for every check
/// domain_probe --log-level debug
///
/// # HTTP/2 frame tracing; h2 is not capped, so RUST_LOG reaches it
/// RUST_LOG=h2=trace domain_probe
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = filter_builder(level, rust_log.as_deref());

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // A second install (e.g. from another test) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builder with `RUST_LOG`-style `filters` applied, then the CLI overrides.
fn filter_builder(level: LevelFilter, filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Info);
    builder.filter_module("domain_probe", level);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_rust_log_reaches_uncapped_modules() {
        let logger = filter_builder(LevelFilter::Warn, Some("h2=trace")).build();
        assert!(enabled(&logger, "h2::codec", Level::Trace));
        assert!(!enabled(&logger, "some_other_crate", Level::Info));
    }

    #[test]
    fn test_cli_level_replaces_rust_log_for_this_crate() {
        let logger = filter_builder(LevelFilter::Warn, Some("domain_probe=debug")).build();
        assert!(!enabled(&logger, "domain_probe::probe", Level::Debug));
        assert!(enabled(&logger, "domain_probe::probe", Level::Warn));

        let logger = filter_builder(LevelFilter::Debug, None).build();
        assert!(enabled(&logger, "domain_probe::probe", Level::Debug));
    }

    #[test]
    fn test_http_stack_capped_at_info() {
        let logger = filter_builder(LevelFilter::Trace, Some("hyper=trace")).build();
        assert!(!enabled(&logger, "hyper::client", Level::Debug));
        assert!(enabled(&logger, "reqwest::connect", Level::Info));
        assert!(!enabled(&logger, "rustls::client", Level::Debug));
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        // One global logger per process: the later call must fail cleanly.
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_err() || second.is_err());
    }
}
