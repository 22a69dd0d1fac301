use std::io::{self, Write};

use crate::error::SinkError;
use crate::sink::Sink;

/// Fallback sink used while no destination has been configured.
///
/// Every method writes the raw message followed by a newline to the process's
/// standard output, without a severity label. Write failures (closed pipe,
/// full disk) are swallowed: the fallback never reports an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    fn print(msg: &str) -> Result<(), SinkError> {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{msg}");
        Ok(())
    }
}

impl Sink for StdoutSink {
    fn debug(&self, msg: &str) -> Result<(), SinkError> {
        Self::print(msg)
    }

    fn info(&self, msg: &str) -> Result<(), SinkError> {
        Self::print(msg)
    }

    fn warning(&self, msg: &str) -> Result<(), SinkError> {
        Self::print(msg)
    }

    fn error(&self, msg: &str) -> Result<(), SinkError> {
        Self::print(msg)
    }

    fn critical(&self, msg: &str) -> Result<(), SinkError> {
        Self::print(msg)
    }
}
