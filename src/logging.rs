//! # Structured Logging Module
//!
//! Environment-aware structured logging for handler registration and dispatch.
//!
//! The crate only emits `tracing` events; installing a subscriber is left to the
//! application. [`init_structured_logging`] is a convenience for binaries and tests.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
///
/// `CHECKED_FN_LOG` overrides the filter, `CHECKED_FN_LOG_FORMAT=json` switches to JSON
/// output. Safe to call more than once.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let filter = || {
            EnvFilter::try_from_env("CHECKED_FN_LOG").unwrap_or_else(|_| EnvFilter::new(&log_level))
        };

        let json_output = std::env::var("CHECKED_FN_LOG_FORMAT").is_ok_and(|format| format == "json");

        // Use try_init to avoid panic if global subscriber already set
        let initialized = if json_output {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_level(true)
                        .with_filter(filter()),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_level(true)
                        .with_ansi(true)
                        .with_filter(filter()),
                )
                .try_init()
        };

        if initialized.is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            log_level = %log_level,
            json = json_output,
            "structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("CHECKED_FN_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "test" => "debug".to_string(),
        "development" => "debug".to_string(),
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log a resolver being appended to a handler
pub fn log_registration(handler: &str, position: usize) {
    tracing::debug!(
        handler = %handler,
        position = position,
        "resolver registered"
    );
}

/// Log a failure dispatched to the resolver at `position`
pub fn log_dispatch(handler: &str, failure_type: &str, position: usize) {
    tracing::trace!(
        handler = %handler,
        failure_type = %failure_type,
        position = position,
        "failure dispatched"
    );
}

/// Log a failure no registered resolver accepts
pub fn log_misconfiguration(handler: &str, failure_type: &str, registered: usize) {
    tracing::warn!(
        handler = %handler,
        failure_type = %failure_type,
        registered = registered,
        "no resolver registered for failure"
    );
}

/// Log a failure leaving a non-throwing callable as an unwinding panic
pub fn log_raise(failure_type: &str, category: &str) {
    tracing::debug!(
        failure_type = %failure_type,
        category = %category,
        "raising failure from non-throwing callable"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detection() {
        let _env = crate::ENV_LOCK.lock();
        std::env::set_var("CHECKED_FN_ENV", "test_override");
        let env = get_environment();
        std::env::remove_var("CHECKED_FN_ENV");
        assert_eq!(env, "test_override");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
        assert_eq!(get_log_level("unknown"), "debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        let _env = crate::ENV_LOCK.lock();
        init_structured_logging();
        init_structured_logging();
        log_registration("test", 0);
        assert!(LOGGER_INITIALIZED.get().is_some());
    }
}
