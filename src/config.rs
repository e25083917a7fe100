use crate::error::{CheckedError, Result};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`HandlerConfig::from_env`]
pub const ENV_PREFIX: &str = "CHECKED_FN";

/// Per-handler settings, only affecting diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Name reported in log events
    pub name: String,
    /// Emit a trace event for every dispatched failure
    pub trace_dispatch: bool,
    /// Emit a warning when no resolver matches a failure
    pub warn_on_misconfiguration: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            name: "handler".to_string(),
            trace_dispatch: false,
            warn_on_misconfiguration: true,
        }
    }
}

impl HandlerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load settings from `CHECKED_FN_*` environment variables, e.g.
    /// `CHECKED_FN_TRACE_DISPATCH=true`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize().map_err(|e| {
            CheckedError::ConfigurationError(format!("Invalid handler configuration: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HandlerConfig::default();

        assert_eq!(config.name, "handler");
        assert!(!config.trace_dispatch);
        assert!(config.warn_on_misconfiguration);
    }

    #[test]
    fn test_named_config_keeps_defaults() {
        let config = HandlerConfig::named("payments");

        assert_eq!(config.name, "payments");
        assert_eq!(
            config.warn_on_misconfiguration,
            HandlerConfig::default().warn_on_misconfiguration
        );
    }

    #[test]
    fn test_from_env() {
        let _env = crate::ENV_LOCK.lock();
        std::env::set_var("CHECKED_FN_NAME", "from_env");
        std::env::set_var("CHECKED_FN_TRACE_DISPATCH", "true");

        let config = HandlerConfig::from_env();

        std::env::set_var("CHECKED_FN_WARN_ON_MISCONFIGURATION", "sometimes");
        let invalid = HandlerConfig::from_env();

        std::env::remove_var("CHECKED_FN_NAME");
        std::env::remove_var("CHECKED_FN_TRACE_DISPATCH");
        std::env::remove_var("CHECKED_FN_WARN_ON_MISCONFIGURATION");

        let config = config.expect("configuration should load");
        assert_eq!(config.name, "from_env");
        assert!(config.trace_dispatch);
        assert!(config.warn_on_misconfiguration);

        assert!(matches!(invalid, Err(CheckedError::ConfigurationError(_))));
    }
}
