//! crates/logging/src/terminator.rs
//! Process termination behind a trait so fatal writes can be observed in tests.

use std::sync::{Mutex, MutexGuard};

/// Exit status used when a fatal message terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Capability invoked after a fatal message has been dispatched.
///
/// Production code uses [`ProcessExit`], which never returns. Test doubles
/// record the request and return so the test process survives.
pub trait Terminator: Send + Sync {
    /// Ends the process with `code`.
    fn terminate(&self, code: i32);
}

/// [`Terminator`] that calls [`std::process::exit`].
///
/// Other in-flight writers are not drained; stdout is line buffered so every
/// completed fallback line has already reached the descriptor.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code)
    }
}

/// [`Terminator`] that records requested exit codes instead of exiting.
///
/// Lets tests and embedders assert that a fatal write asked for termination
/// without losing the process.
///
/// ```
/// use std::sync::Arc;
/// use logging::{LevelLogger, RecordingTerminator};
///
/// let terminator = Arc::new(RecordingTerminator::default());
/// let logger = LevelLogger::with_terminator(terminator.clone());
/// logger.fatal("unrecoverable")?;
/// assert_eq!(terminator.codes(), vec![1]);
/// # Ok::<(), logging::LogError>(())
/// ```
#[derive(Debug, Default)]
pub struct RecordingTerminator {
    codes: Mutex<Vec<i32>>,
}

impl RecordingTerminator {
    /// Exit codes requested so far, oldest first.
    #[must_use]
    pub fn codes(&self) -> Vec<i32> {
        self.lock().clone()
    }

    /// Reports whether termination was requested at least once.
    #[must_use]
    pub fn terminated(&self) -> bool {
        !self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<i32>> {
        self.codes
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.lock().push(code);
    }
}
