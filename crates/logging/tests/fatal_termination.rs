//! Integration tests for fatal termination.
//!
//! Every fatal write asks the terminator for exit status 1 after dispatch,
//! regardless of threshold, sink, or sink outcome.

use std::sync::{Arc, Mutex};

use logging::{FATAL_EXIT_CODE, LevelLogger, RecordingTerminator, Severity, Terminator};
use logging_sink::{Sink, SinkError};
use test_support::{FailingSink, RecordingSink};

/// Terminator that records what the sink had seen at termination time.
struct SnapshotTerminator {
    sink: Arc<RecordingSink>,
    seen: Mutex<Vec<usize>>,
}

impl Terminator for SnapshotTerminator {
    fn terminate(&self, _code: i32) {
        self.seen.lock().unwrap().push(self.sink.len());
    }
}

#[test]
fn exit_code_is_one() {
    assert_eq!(FATAL_EXIT_CODE, 1);
}

/// Fatal with no sink prints to the fallback and terminates.
#[test]
fn fatal_without_sink_terminates() {
    let terminator = Arc::new(RecordingTerminator::default());
    let fallback = Arc::new(RecordingSink::default());
    let logger = LevelLogger::with_terminator(terminator.clone()).with_fallback(fallback.clone());

    assert!(logger.fatal("cannot continue").is_ok());
    assert_eq!(fallback.calls(), vec![("critical", "cannot continue".to_owned())]);
    assert_eq!(terminator.codes(), vec![1]);
}

/// Termination happens after the message reached the sink.
#[test]
fn termination_follows_dispatch() {
    let sink = Arc::new(RecordingSink::default());
    let terminator = Arc::new(SnapshotTerminator {
        sink: Arc::clone(&sink),
        seen: Mutex::new(Vec::new()),
    });
    let logger = LevelLogger::with_terminator(terminator.clone());
    logger.set_sink(sink.clone());

    logger.fatal("last words").unwrap();
    assert_eq!(*terminator.seen.lock().unwrap(), vec![1]);
}

/// A failing sink does not prevent termination.
#[test]
fn sink_failure_still_terminates() {
    let terminator = Arc::new(RecordingTerminator::default());
    let logger = LevelLogger::with_terminator(terminator.clone());
    let sink = Arc::new(FailingSink::default());
    logger.set_sink(sink.clone());

    assert!(logger.fatal("boom").is_err());
    assert_eq!(sink.attempts(), 1);
    assert_eq!(terminator.codes(), vec![1]);
}

/// Fatal sits at the top of the order so no threshold can gate it.
#[test]
fn fatal_is_emitted_under_every_threshold() {
    for threshold in Severity::ALL {
        let terminator = Arc::new(RecordingTerminator::default());
        let logger = LevelLogger::with_terminator(terminator.clone());
        let sink = Arc::new(RecordingSink::default());
        logger.set_sink(sink.clone());
        logger.set_threshold(threshold);

        logger.fatal("f").unwrap();
        assert_eq!(sink.calls(), vec![("critical", "f".to_owned())]);
        assert_eq!(terminator.codes(), vec![1]);
    }
}

/// Fatal through the generic and ordinal entry points terminates too.
#[test]
fn every_fatal_entry_point_terminates() {
    let terminator = Arc::new(RecordingTerminator::default());
    let logger = LevelLogger::with_terminator(terminator.clone());
    logger.set_sink(Arc::new(RecordingSink::default()));

    logger.write(Severity::Fatal, "a").unwrap();
    logger.write_ordinal(4, "b").unwrap();
    logger.fatal("c").unwrap();
    assert_eq!(terminator.codes(), vec![1, 1, 1]);
}

/// Non-fatal severities never terminate, even on sink errors.
#[test]
fn non_fatal_never_terminates() {
    let terminator = Arc::new(RecordingTerminator::default());
    let logger = LevelLogger::with_terminator(terminator.clone());
    logger.set_sink(Arc::new(FailingSink::default()));

    for severity in &Severity::ALL[..4] {
        let _ = logger.write(*severity, "x");
    }
    assert!(!terminator.terminated());
}

/// Custom sinks see fatal messages on `critical`.
#[test]
fn critical_method_receives_fatal() {
    struct OnlyCritical(Mutex<Vec<String>>);

    impl Sink for OnlyCritical {
        fn debug(&self, _msg: &str) -> Result<(), SinkError> {
            Err(SinkError::rejected("debug"))
        }
        fn info(&self, _msg: &str) -> Result<(), SinkError> {
            Err(SinkError::rejected("info"))
        }
        fn warning(&self, _msg: &str) -> Result<(), SinkError> {
            Err(SinkError::rejected("warning"))
        }
        fn error(&self, _msg: &str) -> Result<(), SinkError> {
            Err(SinkError::rejected("error"))
        }
        fn critical(&self, msg: &str) -> Result<(), SinkError> {
            self.0.lock().unwrap().push(msg.to_owned());
            Ok(())
        }
    }

    let sink = Arc::new(OnlyCritical(Mutex::new(Vec::new())));
    let logger = LevelLogger::with_terminator(Arc::new(RecordingTerminator::default()));
    logger.set_sink(sink.clone());

    logger.fatal("disk gone").unwrap();
    assert_eq!(*sink.0.lock().unwrap(), vec!["disk gone".to_owned()]);
}
