//! Sink doubles and capture helpers shared by the workspace's tests.
//!
//! This crate depends on `logging-sink` only, so `logging` can pull it in as a
//! dev-dependency without building a second copy of itself.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use logging_sink::{LineSink, Sink, SinkError};
use tempfile::NamedTempFile;

/// Sink that records every call as `(method, message)`.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingSink {
    /// Returns a snapshot of the recorded calls in arrival order.
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }

    /// Returns only the messages, dropping the method names.
    pub fn messages(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, msg)| msg).collect()
    }

    /// Number of calls received so far.
    pub fn len(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .len()
    }

    /// Reports whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, method: &'static str, msg: &str) -> Result<(), SinkError> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push((method, msg.to_owned()));
        Ok(())
    }
}

impl Sink for RecordingSink {
    fn debug(&self, msg: &str) -> Result<(), SinkError> {
        self.record("debug", msg)
    }

    fn info(&self, msg: &str) -> Result<(), SinkError> {
        self.record("info", msg)
    }

    fn warning(&self, msg: &str) -> Result<(), SinkError> {
        self.record("warning", msg)
    }

    fn error(&self, msg: &str) -> Result<(), SinkError> {
        self.record("error", msg)
    }

    fn critical(&self, msg: &str) -> Result<(), SinkError> {
        self.record("critical", msg)
    }
}

/// Sink that rejects every message and counts the attempts.
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    /// Number of messages offered to this sink.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn reject(&self) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::rejected("failing sink"))
    }
}

impl Sink for FailingSink {
    fn debug(&self, _msg: &str) -> Result<(), SinkError> {
        self.reject()
    }

    fn info(&self, _msg: &str) -> Result<(), SinkError> {
        self.reject()
    }

    fn warning(&self, _msg: &str) -> Result<(), SinkError> {
        self.reject()
    }

    fn error(&self, _msg: &str) -> Result<(), SinkError> {
        self.reject()
    }

    fn critical(&self, _msg: &str) -> Result<(), SinkError> {
        self.reject()
    }
}

/// A [`LineSink`] writing to a temporary file whose contents can be read back.
pub struct CapturedFile {
    file: NamedTempFile,
}

impl CapturedFile {
    /// Creates an empty temporary file.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            file: NamedTempFile::new()?,
        })
    }

    /// Opens a labelled line sink appending to the file.
    pub fn line_sink(&self) -> io::Result<LineSink<fs::File>> {
        Ok(LineSink::new(self.file.reopen()?))
    }

    /// Path of the underlying file.
    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Reads everything written so far.
    pub fn contents(&self) -> io::Result<String> {
        fs::read_to_string(self.file.path())
    }
}
