#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the destinations that the `logging` crate's
//! `LevelLogger` forwards already-gated messages to. Every destination
//! implements [`Sink`], a five-method contract with one entry point per
//! severity (`debug`, `info`, `warning`, `error`, `critical`).
//!
//! # Design
//!
//! - [`StdoutSink`] is the null-object fallback installed when the caller has
//!   not configured a sink. It prints the raw message on its own line and never
//!   fails.
//! - [`LineSink`] wraps any [`std::io::Write`] implementor behind a mutex and
//!   renders `LABEL: message` lines, honouring a [`LineMode`].
//! - [`syslog::SyslogSink`] (Unix only) routes messages to syslog(3) with the
//!   matching priority.
//!
//! # Invariants
//!
//! - Callers never prefix messages with a severity label. A sink that wants a
//!   label adds it itself; sinks whose transport carries the severity natively
//!   (syslog) forward the message untouched.
//! - Sinks are `Send + Sync` so a single handle can be shared by every thread
//!   of the host program.
//!
//! # Errors
//!
//! Sink methods return [`SinkError`]. I/O failures from the wrapped writer
//! surface as [`SinkError::Io`]; messages the transport cannot represent
//! surface as [`SinkError::InvalidMessage`].
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineSink, Sink};
//!
//! let sink = LineSink::new(Vec::new());
//! sink.warning("disk almost full").unwrap();
//! sink.error("disk full").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "WARNING: disk almost full\nERROR: disk full\n");
//! ```

mod error;
mod line_mode;
mod line_sink;
mod sink;
mod stdout;
#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;

pub use error::SinkError;
pub use line_mode::LineMode;
pub use line_sink::LineSink;
pub use sink::Sink;
pub use stdout::StdoutSink;

/// Facility name used when syslog is selected without naming one.
pub const DEFAULT_SYSLOG_FACILITY: &str = "user";
/// Tag (ident) used when syslog is selected without naming one.
pub const DEFAULT_SYSLOG_TAG: &str = "levellog";
