//! crates/logging/src/config.rs
//! Logger configuration loaded from the environment or deserialized with serde.

use std::env;
use std::sync::Arc;

use logging_sink::{DEFAULT_SYSLOG_FACILITY, DEFAULT_SYSLOG_TAG, Sink};

use crate::error::ConfigError;
use crate::levels::Severity;
use crate::logger::LevelLogger;

/// Environment variable naming the threshold (`debug`..`fatal` or `0`..`4`).
pub const THRESHOLD_ENV: &str = "LEVELLOG_THRESHOLD";
/// Environment variable selecting syslog and naming its facility.
pub const SYSLOG_FACILITY_ENV: &str = "LEVELLOG_SYSLOG_FACILITY";
/// Environment variable selecting syslog and naming its tag.
pub const SYSLOG_TAG_ENV: &str = "LEVELLOG_SYSLOG_TAG";

/// Where a configured logger sends its messages.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum SinkKind {
    /// No sink; the stdout fallback is used.
    #[default]
    Stdout,
    /// syslog(3) with the given facility name and tag.
    Syslog {
        /// Facility name such as `daemon` or `local3`.
        facility: String,
        /// Ident passed to `openlog`.
        tag: String,
    },
}

/// Threshold plus sink selection for a [`LevelLogger`].
///
/// # Examples
///
/// ```
/// use logging::{LevelLogger, LoggerConfig, Severity};
///
/// let config = LoggerConfig::from_lookup(|name| match name {
///     "LEVELLOG_THRESHOLD" => Some("warning".to_owned()),
///     _ => None,
/// })?;
/// assert_eq!(config.threshold, Severity::Warning);
///
/// let logger = LevelLogger::new();
/// config.apply(&logger)?;
/// assert_eq!(logger.threshold(), Severity::Warning);
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Minimum severity that will be emitted.
    pub threshold: Severity,
    /// Destination for emitted messages.
    pub sink: SinkKind,
}

impl LoggerConfig {
    /// Reads [`THRESHOLD_ENV`], [`SYSLOG_FACILITY_ENV`] and [`SYSLOG_TAG_ENV`].
    ///
    /// Unset or empty variables keep their defaults. Setting either syslog
    /// variable selects the syslog sink; the other one defaults to `user` /
    /// `levellog`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = value(THRESHOLD_ENV) {
            config.threshold = raw
                .parse()
                .map_err(|error| ConfigError::InvalidThreshold {
                    source_name: THRESHOLD_ENV,
                    error,
                })?;
        }

        let facility = value(SYSLOG_FACILITY_ENV);
        let tag = value(SYSLOG_TAG_ENV);
        if facility.is_some() || tag.is_some() {
            let facility = facility.unwrap_or_else(|| DEFAULT_SYSLOG_FACILITY.to_owned());
            validate_facility(&facility)?;
            config.sink = SinkKind::Syslog {
                facility: facility.trim().to_ascii_lowercase(),
                tag: tag.unwrap_or_else(|| DEFAULT_SYSLOG_TAG.to_owned()),
            };
        }

        Ok(config)
    }

    /// Opens the configured sink. `None` means the stdout fallback.
    pub fn open_sink(&self) -> Result<Option<Arc<dyn Sink>>, ConfigError> {
        match &self.sink {
            SinkKind::Stdout => Ok(None),
            SinkKind::Syslog { facility, tag } => open_syslog(facility, tag).map(Some),
        }
    }

    /// Installs the threshold and sink on `logger`.
    pub fn apply(&self, logger: &LevelLogger) -> Result<(), ConfigError> {
        let sink = self.open_sink()?;
        logger.set_threshold(self.threshold);
        match sink {
            Some(sink) => logger.set_sink(sink),
            None => logger.reset_sink(),
        }
        Ok(())
    }
}

#[cfg(unix)]
fn validate_facility(name: &str) -> Result<(), ConfigError> {
    use logging_sink::syslog::SyslogFacility;

    SyslogFacility::from_name(name)
        .map(|_| ())
        .ok_or_else(|| ConfigError::InvalidFacility(name.to_owned()))
}

#[cfg(not(unix))]
fn validate_facility(_name: &str) -> Result<(), ConfigError> {
    Err(ConfigError::SyslogUnsupported)
}

#[cfg(unix)]
fn open_syslog(facility: &str, tag: &str) -> Result<Arc<dyn Sink>, ConfigError> {
    use logging_sink::syslog::{SyslogConfig, SyslogFacility, SyslogSink};

    let facility = SyslogFacility::from_name(facility)
        .ok_or_else(|| ConfigError::InvalidFacility(facility.to_owned()))?;
    Ok(Arc::new(SyslogSink::open(SyslogConfig::new(facility, tag))))
}

#[cfg(not(unix))]
fn open_syslog(_facility: &str, _tag: &str) -> Result<Arc<dyn Sink>, ConfigError> {
    Err(ConfigError::SyslogUnsupported)
}
