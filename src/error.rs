//! Error types raised by the crate itself.
//!

use crate::failure::{Failure, FailureType};
use thiserror::Error;

/// Boxed error used as the `source` of the crate's own error types
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckedError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<config::ConfigError> for CheckedError {
    fn from(error: config::ConfigError) -> Self {
        CheckedError::ConfigurationError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CheckedError>;

/// Raised when a handler is asked to resolve a failure that none of its resolvers accept.
///
/// Carries the type of the missed failure and, when built from an actual failure, that
/// failure as its source.
#[derive(Debug, Error)]
#[error("handler has no resolver registered for failure type `{missed_type}`")]
pub struct MisconfiguredHandler {
    missed_type: String,
    #[source]
    cause: Option<BoxError>,
}

impl MisconfiguredHandler {
    /// Build from the failure that could not be resolved
    pub fn for_failure(failure: Failure) -> Self {
        Self {
            missed_type: failure.type_name().to_string(),
            cause: Some(failure.into_boxed()),
        }
    }

    /// Build from a type token, without any cause
    pub fn for_type(failure_type: &FailureType) -> Self {
        Self {
            missed_type: failure_type.name().to_string(),
            cause: None,
        }
    }

    /// Name of the failure type no resolver was registered for
    pub fn missed_type(&self) -> &str {
        &self.missed_type
    }
}

/// Default wrapper for checked failures escaping a callable with no explicit strategy.
#[derive(Debug, Error)]
#[error("unhandled checked failure `{type_name}`: {source}")]
pub struct UnhandledCheckedFailure {
    type_name: &'static str,
    source: BoxError,
}

impl UnhandledCheckedFailure {
    pub fn new(failure: Failure) -> Self {
        Self {
            type_name: failure.type_name(),
            source: failure.into_boxed(),
        }
    }

    /// Concrete type name of the wrapped failure
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
