//! crates/logging/src/global.rs
//! Process-wide logger facade.
//!
//! A single [`LevelLogger`] is created on first use with threshold
//! [`Severity::Debug`], no sink, and [`ProcessExit`](crate::ProcessExit) as
//! terminator. The free functions below forward to it, so any part of a
//! program can log without threading a handle through. Code that wants
//! isolation (tests, embedded use) constructs its own [`LevelLogger`]
//! instead.
//!
//! ```no_run
//! use std::sync::Arc;
//! use logging::Severity;
//! use logging_sink::LineSink;
//!
//! logging::set_threshold(Severity::Info);
//! logging::set_sink(Arc::new(LineSink::new(std::io::stderr())));
//! logging::info("service started").unwrap();
//! ```

use std::sync::{Arc, OnceLock};

use logging_sink::Sink;

use crate::error::LogError;
use crate::levels::Severity;
use crate::logger::LevelLogger;

/// Returns the process-wide logger.
pub fn global() -> &'static LevelLogger {
    static GLOBAL: OnceLock<LevelLogger> = OnceLock::new();
    GLOBAL.get_or_init(LevelLogger::new)
}

/// Installs `sink` on the process-wide logger.
pub fn set_sink(sink: Arc<dyn Sink>) {
    global().set_sink(sink);
}

/// Removes the process-wide sink; writes go to stdout again.
pub fn reset_sink() {
    global().reset_sink();
}

/// Sets the process-wide threshold.
pub fn set_threshold(threshold: Severity) {
    global().set_threshold(threshold);
}

/// Returns the process-wide threshold.
pub fn threshold() -> Severity {
    global().threshold()
}

/// Writes `msg` at `severity` through the process-wide logger.
pub fn write(severity: Severity, msg: &str) -> Result<(), LogError> {
    global().write(severity, msg)
}

/// Writes a debug message through the process-wide logger.
pub fn debug(msg: &str) -> Result<(), LogError> {
    global().debug(msg)
}

/// Writes an info message through the process-wide logger.
pub fn info(msg: &str) -> Result<(), LogError> {
    global().info(msg)
}

/// Writes a warning message through the process-wide logger.
pub fn warning(msg: &str) -> Result<(), LogError> {
    global().warning(msg)
}

/// Writes an error message through the process-wide logger.
pub fn error(msg: &str) -> Result<(), LogError> {
    global().error(msg)
}

/// Writes a fatal message through the process-wide logger and exits with status 1.
pub fn fatal(msg: &str) -> Result<(), LogError> {
    global().fatal(msg)
}
