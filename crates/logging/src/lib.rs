#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a small leveled logger: a minimum severity threshold, a
//! pluggable [`Sink`](logging_sink::Sink), and five write functions
//! ([`debug`], [`info`], [`warning`], [`error`], [`fatal`]). Messages below
//! the threshold are dropped, everything else goes to the sink (or to stdout
//! when none is installed), and a fatal message terminates the process with
//! exit status 1.
//!
//! # Design
//!
//! - [`LevelLogger`] owns the two knobs (threshold and sink) behind a
//!   reader/writer lock. Tests and embedders build their own instance.
//! - The free functions in this crate root forward to a lazily created
//!   process-wide [`LevelLogger`] (see [`global()`]).
//! - Termination is delegated to a [`Terminator`]; [`ProcessExit`] is the
//!   production implementation and [`RecordingTerminator`] the observable one.
//! - [`LoggerConfig`] reads the threshold and sink choice from the
//!   environment (`LEVELLOG_THRESHOLD`, `LEVELLOG_SYSLOG_FACILITY`,
//!   `LEVELLOG_SYSLOG_TAG`) or, with the `serde` feature, from any serde format.
//!
//! # Invariants
//!
//! - The threshold is inclusive: a message is emitted when its severity is at
//!   or above it. The default threshold is [`Severity::Debug`].
//! - Messages reach the sink byte-for-byte; the logger never adds labels.
//! - A fatal write always asks the terminator to exit with
//!   [`FATAL_EXIT_CODE`] after dispatch, even when the sink failed.
//!
//! # Errors
//!
//! Writes return [`LogError::Sink`] when the installed sink fails and
//! [`LogError::UnrecognizedLevel`] when a numeric severity is out of range.
//! Suppressed writes and stdout writes always succeed.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{LevelLogger, RecordingTerminator, Severity};
//! use logging_sink::LineSink;
//!
//! let terminator = Arc::new(RecordingTerminator::default());
//! let logger = LevelLogger::with_terminator(terminator.clone());
//! let sink = Arc::new(LineSink::new(Vec::new()));
//! logger.set_sink(sink.clone());
//! logger.set_threshold(Severity::Warning);
//!
//! logger.info("not shown")?;
//! logger.warning("cache miss rate high")?;
//! logger.fatal("state corrupted")?;
//! assert_eq!(terminator.codes(), vec![1]);
//! # Ok::<(), logging::LogError>(())
//! ```

mod config;
mod diagnostics;
mod error;
mod global;
mod guard;
mod levels;
mod logger;
mod terminator;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LoggerConfig, SYSLOG_FACILITY_ENV, SYSLOG_TAG_ENV, SinkKind, THRESHOLD_ENV};
pub use logging_sink::{DEFAULT_SYSLOG_FACILITY, DEFAULT_SYSLOG_TAG};
pub use error::{ConfigError, LogError, SeverityParseError};
pub use global::{
    debug, error, fatal, global, info, reset_sink, set_sink, set_threshold, threshold, warning,
    write,
};
pub use guard::ThresholdGuard;
pub use levels::Severity;
pub use logger::LevelLogger;
pub use terminator::{FATAL_EXIT_CODE, ProcessExit, RecordingTerminator, Terminator};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LevelLoggerLayer, init_tracing};
