use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::error::SinkError;
use crate::line_mode::LineMode;
use crate::sink::Sink;

const DEBUG_LABEL: &str = "DEBUG";
const INFO_LABEL: &str = "INFO";
const WARNING_LABEL: &str = "WARNING";
const ERROR_LABEL: &str = "ERROR";
const FATAL_LABEL: &str = "FATAL";

/// Generic line-oriented sink writing into any [`Write`] implementor.
///
/// Each message is rendered as `LABEL: message` followed by a newline, where
/// the label is the severity name (`FATAL` for messages arriving through
/// [`critical`](Sink::critical)). Labels can be
/// disabled with [`without_labels`](Self::without_labels) and the trailing
/// newline is governed by the sink's [`LineMode`].
///
/// The writer sits behind a mutex so concurrent writers never interleave the
/// label and message of two different lines.
///
/// # Examples
///
/// Write labelled lines into a buffer:
///
/// ```
/// use logging_sink::{LineSink, Sink};
///
/// let sink = LineSink::new(Vec::new());
/// sink.info("started")?;
/// sink.critical("out of memory")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "INFO: started\nFATAL: out of memory\n");
/// # Ok::<(), logging_sink::SinkError>(())
/// ```
///
/// Forward messages untouched:
///
/// ```
/// use logging_sink::{LineMode, LineSink, Sink};
///
/// let sink = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline).without_labels();
/// sink.debug("raw")?;
/// assert_eq!(sink.into_inner(), b"raw".to_vec());
/// # Ok::<(), logging_sink::SinkError>(())
/// ```
pub struct LineSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
    labels: bool,
}

impl<W> LineSink<W> {
    /// Creates a labelled sink that appends a newline after each message.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a labelled sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
            labels: true,
        }
    }

    /// Disables the `LABEL: ` prefix.
    #[must_use]
    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Reports whether messages are prefixed with their severity label.
    #[must_use]
    pub const fn labels(&self) -> bool {
        self.labels
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock_writer(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl<W> LineSink<W>
where
    W: Write,
{
    fn write_line(&self, label: &str, msg: &str) -> Result<(), SinkError> {
        let mut writer = self.lock_writer();
        if self.labels {
            writer.write_all(label.as_bytes())?;
            writer.write_all(b": ")?;
        }
        writer.write_all(msg.as_bytes())?;
        if self.line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> Result<(), SinkError> {
        self.lock_writer().flush()?;
        Ok(())
    }
}

impl<W> Sink for LineSink<W>
where
    W: Write + Send,
{
    fn debug(&self, msg: &str) -> Result<(), SinkError> {
        self.write_line(DEBUG_LABEL, msg)
    }

    fn info(&self, msg: &str) -> Result<(), SinkError> {
        self.write_line(INFO_LABEL, msg)
    }

    fn warning(&self, msg: &str) -> Result<(), SinkError> {
        self.write_line(WARNING_LABEL, msg)
    }

    fn error(&self, msg: &str) -> Result<(), SinkError> {
        self.write_line(ERROR_LABEL, msg)
    }

    fn critical(&self, msg: &str) -> Result<(), SinkError> {
        self.write_line(FATAL_LABEL, msg)
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for LineSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("line_mode", &self.line_mode)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "collector gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "collector gone"))
        }
    }

    fn output(sink: LineSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8")
    }

    #[test]
    fn each_method_uses_its_own_label() {
        let sink = LineSink::new(Vec::new());
        sink.debug("d").unwrap();
        sink.info("i").unwrap();
        sink.warning("w").unwrap();
        sink.error("e").unwrap();
        sink.critical("c").unwrap();

        assert_eq!(
            output(sink),
            "DEBUG: d\nINFO: i\nWARNING: w\nERROR: e\nFATAL: c\n"
        );
    }

    #[test]
    fn without_labels_forwards_raw_message() {
        let sink = LineSink::new(Vec::new()).without_labels();
        sink.error("plain").unwrap();
        assert!(!sink.labels());
        assert_eq!(output(sink), "plain\n");
    }

    #[test]
    fn without_newline_mode_concatenates() {
        let sink = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.info("a").unwrap();
        sink.info("b").unwrap();
        assert_eq!(sink.line_mode(), LineMode::WithoutNewline);
        assert_eq!(output(sink), "INFO: aINFO: b");
    }

    #[test]
    fn empty_message_still_produces_a_line() {
        let sink = LineSink::new(Vec::new()).without_labels();
        sink.info("").unwrap();
        assert_eq!(output(sink), "\n");
    }

    #[test]
    fn writer_failure_surfaces_as_io_error() {
        let sink = LineSink::new(BrokenWriter);
        let err = sink.warning("lost").unwrap_err();
        assert!(matches!(err, SinkError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn flush_failure_surfaces_as_io_error() {
        let sink = LineSink::new(BrokenWriter);
        assert!(matches!(sink.flush(), Err(SinkError::Io(_))));
    }

    #[test]
    fn default_uses_default_writer() {
        let sink: LineSink<Vec<u8>> = LineSink::default();
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        assert!(sink.labels());
    }

    #[test]
    fn debug_format_names_the_sink() {
        let sink = LineSink::new(Vec::<u8>::new());
        let debug = format!("{sink:?}");
        assert!(debug.contains("LineSink"));
        assert!(debug.contains("WithNewline"));
    }
}
