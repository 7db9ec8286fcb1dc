//! `RUST_LOG` handling for the activity log panel.

pub use crate::error_classifier::LogLevel;
use std::env;
use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "bot_admin";

/// Threshold taken from `RUST_LOG`, defaulting to info.
pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_default();
    parse_rust_log_level(&rust_log)
}

/// Picks the level that applies to this crate.
///
/// A `bot_admin=<level>` directive wins over a bare `<level>`; directives for
/// other targets are ignored. Anything unparseable falls back to info.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut global = None;
    for directive in rust_log.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) if target.trim() == CRATE_TARGET => {
                if let Some(level) = level_from_str(level) {
                    return level;
                }
            }
            Some(_) => {}
            None => global = global.or_else(|| level_from_str(directive)),
        }
    }
    global.unwrap_or(LogLevel::Info)
}

fn level_from_str(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        _ => None,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Sends `log` records to stderr, filtered by `RUST_LOG`. Silent when it is unset.
pub fn init_stderr_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // A second call (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_crate_directive_wins() {
        assert_eq!(parse_rust_log_level("bot_admin=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("error,bot_admin=trace,hyper=info"),
            LogLevel::Trace
        );
        // Other targets do not lower our threshold.
        assert_eq!(parse_rust_log_level("hyper=trace"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("hyper=trace,warn"), LogLevel::Warn);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
    }
}
