//! crates/logging/src/error.rs
//! Error types returned by the logger and its configuration layer.

use logging_sink::SinkError;
use thiserror::Error;

/// Error returned by a write call.
///
/// Suppressed messages and messages written to the stdout fallback never
/// produce an error; only a configured sink can fail.
#[derive(Debug, Error)]
pub enum LogError {
    /// The configured sink rejected the message.
    #[error(transparent)]
    Sink(#[from] SinkError),
    /// A numeric severity outside `0..=4` reached the dispatcher.
    #[error("unrecognized log level {0}")]
    UnrecognizedLevel(u8),
}

/// Error returned when a string does not name a [`Severity`](crate::Severity).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized severity '{input}'; expected debug, info, warning, error, or fatal")]
pub struct SeverityParseError {
    input: String,
}

impl SeverityParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input, trimmed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Error produced while building a [`LoggerConfig`](crate::LoggerConfig).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The threshold value is not a severity.
    #[error("invalid threshold in {source_name}: {error}")]
    InvalidThreshold {
        /// Where the value came from (an environment variable name).
        source_name: &'static str,
        /// The parse failure.
        error: SeverityParseError,
    },
    /// The syslog facility name is not recognised.
    #[error("invalid syslog facility '{0}'")]
    InvalidFacility(String),
    /// Syslog was requested on a platform without syslog(3).
    #[error("syslog is not available on this platform")]
    SyslogUnsupported,
}
