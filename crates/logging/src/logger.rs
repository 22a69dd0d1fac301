//! crates/logging/src/logger.rs
//! The gate-then-dispatch core.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use logging_sink::{Sink, SinkError, StdoutSink};

use crate::diagnostics;
use crate::error::LogError;
use crate::guard::ThresholdGuard;
use crate::levels::Severity;
use crate::terminator::{FATAL_EXIT_CODE, ProcessExit, Terminator};

struct State {
    threshold: Severity,
    sink: Option<Arc<dyn Sink>>,
}

/// Leveled logger with a severity threshold and a replaceable sink.
///
/// Writes below the threshold are dropped. Everything else is forwarded,
/// byte-for-byte, to the sink method matching its severity, or printed on its
/// own line to stdout while no sink is installed. A fatal write terminates the
/// process through the logger's [`Terminator`] once dispatch has been
/// attempted, whatever the sink reported.
///
/// Configuration calls take the state lock exclusively; writes share it for
/// the duration of the sink call, so any number of threads may write
/// concurrently while a configuration change waits for them to finish.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{LevelLogger, Severity};
/// use logging_sink::LineSink;
///
/// let logger = LevelLogger::new();
/// let sink = Arc::new(LineSink::new(Vec::new()));
/// logger.set_sink(sink.clone());
/// logger.set_threshold(Severity::Warning);
///
/// logger.info("suppressed")?;
/// logger.error("disk full")?;
///
/// logger.reset_sink();
/// let sink = Arc::into_inner(sink).unwrap();
/// assert_eq!(sink.into_inner(), b"ERROR: disk full\n".to_vec());
/// # Ok::<(), logging::LogError>(())
/// ```
pub struct LevelLogger {
    state: RwLock<State>,
    fallback: Arc<dyn Sink>,
    terminator: Arc<dyn Terminator>,
}

impl LevelLogger {
    /// Creates a logger with threshold [`Severity::Debug`], no sink, and
    /// [`ProcessExit`] as terminator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_terminator(Arc::new(ProcessExit))
    }

    /// Creates a logger that hands fatal termination to `terminator`.
    #[must_use]
    pub fn with_terminator(terminator: Arc<dyn Terminator>) -> Self {
        Self {
            state: RwLock::new(State {
                threshold: Severity::Debug,
                sink: None,
            }),
            fallback: Arc::new(StdoutSink),
            terminator,
        }
    }

    /// Replaces the destination used while no sink is installed.
    ///
    /// Errors from the fallback are discarded.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn Sink>) -> Self {
        self.fallback = fallback;
        self
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Installs `sink`. Writes already in flight may still reach the previous one.
    ///
    /// The logger keeps a shared handle only; closing or otherwise tearing the
    /// sink down remains the caller's business.
    pub fn set_sink(&self, sink: Arc<dyn Sink>) {
        self.write_state().sink = Some(sink);
        diagnostics::sink_changed(true);
    }

    /// Removes the installed sink so writes go to the stdout fallback again.
    pub fn reset_sink(&self) {
        self.write_state().sink = None;
        diagnostics::sink_changed(false);
    }

    /// Returns the installed sink, if any.
    #[must_use]
    pub fn sink(&self) -> Option<Arc<dyn Sink>> {
        self.read_state().sink.clone()
    }

    /// Reports whether a sink is installed.
    #[must_use]
    pub fn has_sink(&self) -> bool {
        self.read_state().sink.is_some()
    }

    /// Sets the minimum severity that will be emitted.
    pub fn set_threshold(&self, threshold: Severity) {
        let previous = self.replace_threshold(threshold);
        diagnostics::threshold_changed(previous, threshold);
    }

    pub(crate) fn replace_threshold(&self, threshold: Severity) -> Severity {
        std::mem::replace(&mut self.write_state().threshold, threshold)
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.read_state().threshold
    }

    /// Overrides the threshold until the returned guard is dropped.
    ///
    /// ```
    /// use logging::{LevelLogger, Severity};
    ///
    /// let logger = LevelLogger::new();
    /// {
    ///     let _quiet = logger.scoped_threshold(Severity::Error);
    ///     assert_eq!(logger.threshold(), Severity::Error);
    /// }
    /// assert_eq!(logger.threshold(), Severity::Debug);
    /// ```
    pub fn scoped_threshold(&self, threshold: Severity) -> ThresholdGuard<'_> {
        let previous = self.replace_threshold(threshold);
        ThresholdGuard::new(self, previous)
    }

    /// Writes `msg` at `severity`.
    ///
    /// Returns `Ok(())` when the message is below the threshold or went to the
    /// stdout fallback. A [`Severity::Fatal`] write terminates the process
    /// after dispatch; the result is only observed when the terminator returns.
    pub fn write(&self, severity: Severity, msg: &str) -> Result<(), LogError> {
        let result = self.dispatch(severity, msg);
        if severity == Severity::Fatal {
            self.terminator.terminate(FATAL_EXIT_CODE);
        }
        result
    }

    /// Writes `msg` at the severity with the given ordinal.
    ///
    /// Ordinals outside `0..=4` yield [`LogError::UnrecognizedLevel`] and
    /// nothing is written.
    pub fn write_ordinal(&self, ordinal: u8, msg: &str) -> Result<(), LogError> {
        let severity = Severity::try_from(ordinal)?;
        self.write(severity, msg)
    }

    fn dispatch(&self, severity: Severity, msg: &str) -> Result<(), LogError> {
        let state = self.read_state();
        if !severity.passes(state.threshold) {
            return Ok(());
        }

        match state.sink.as_deref() {
            Some(sink) => forward(sink, severity, msg).map_err(LogError::from),
            None => {
                let _ = forward(self.fallback.as_ref(), severity, msg);
                Ok(())
            }
        }
    }

    /// Writes a debug message.
    pub fn debug(&self, msg: &str) -> Result<(), LogError> {
        self.write(Severity::Debug, msg)
    }

    /// Writes an info message.
    pub fn info(&self, msg: &str) -> Result<(), LogError> {
        self.write(Severity::Info, msg)
    }

    /// Writes a warning message.
    pub fn warning(&self, msg: &str) -> Result<(), LogError> {
        self.write(Severity::Warning, msg)
    }

    /// Writes an error message.
    pub fn error(&self, msg: &str) -> Result<(), LogError> {
        self.write(Severity::Error, msg)
    }

    /// Writes a fatal message, then terminates the process with exit status 1.
    pub fn fatal(&self, msg: &str) -> Result<(), LogError> {
        self.write(Severity::Fatal, msg)
    }
}

fn forward(sink: &dyn Sink, severity: Severity, msg: &str) -> Result<(), SinkError> {
    match severity {
        Severity::Debug => sink.debug(msg),
        Severity::Info => sink.info(msg),
        Severity::Warning => sink.warning(msg),
        Severity::Error => sink.error(msg),
        Severity::Fatal => sink.critical(msg),
    }
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("LevelLogger")
            .field("threshold", &state.threshold)
            .field("has_sink", &state.sink.is_some())
            .finish_non_exhaustive()
    }
}
