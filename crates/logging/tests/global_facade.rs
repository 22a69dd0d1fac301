//! Integration tests for the process-wide logger facade.
//!
//! All tests here mutate the same global logger, so they serialize on a lock
//! and restore the defaults before releasing it. Fatal is never written
//! through the facade because it would exit the test binary.

use std::sync::{Arc, Mutex, MutexGuard};

use logging::{LogError, Severity};
use test_support::RecordingSink;

static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

struct Reset<'a> {
    _lock: MutexGuard<'a, ()>,
}

impl Drop for Reset<'_> {
    fn drop(&mut self) {
        logging::reset_sink();
        logging::set_threshold(Severity::Debug);
    }
}

fn exclusive() -> Reset<'static> {
    let lock = GLOBAL_LOCK
        .lock()
        .unwrap_or_else(|poison| poison.into_inner());
    logging::reset_sink();
    logging::set_threshold(Severity::Debug);
    Reset { _lock: lock }
}

#[test]
fn global_starts_at_debug_without_sink() {
    let _reset = exclusive();
    assert_eq!(logging::threshold(), Severity::Debug);
    assert!(!logging::global().has_sink());
}

#[test]
fn facade_functions_reach_installed_sink() {
    let _reset = exclusive();
    let sink = Arc::new(RecordingSink::default());
    logging::set_sink(sink.clone());

    logging::debug("d").unwrap();
    logging::info("i").unwrap();
    logging::warning("w").unwrap();
    logging::error("e").unwrap();
    logging::write(Severity::Info, "generic").unwrap();

    assert_eq!(
        sink.calls(),
        vec![
            ("debug", "d".to_owned()),
            ("info", "i".to_owned()),
            ("warning", "w".to_owned()),
            ("error", "e".to_owned()),
            ("info", "generic".to_owned()),
        ]
    );
}

#[test]
fn facade_threshold_gates_messages() {
    let _reset = exclusive();
    let sink = Arc::new(RecordingSink::default());
    logging::set_sink(sink.clone());
    logging::set_threshold(Severity::Error);

    assert_eq!(logging::threshold(), Severity::Error);
    logging::info("dropped").unwrap();
    logging::warning("dropped").unwrap();
    logging::error("kept").unwrap();

    assert_eq!(sink.messages(), vec!["kept"]);
}

#[test]
fn reset_sink_returns_to_stdout() {
    let _reset = exclusive();
    let sink = Arc::new(RecordingSink::default());
    logging::set_sink(sink.clone());
    logging::reset_sink();

    logging::info("goes to stdout").unwrap();
    assert!(sink.is_empty());
    assert!(!logging::global().has_sink());
}

#[test]
fn facade_rejects_unknown_ordinal() {
    let _reset = exclusive();
    assert!(matches!(
        logging::global().write_ordinal(9, "x"),
        Err(LogError::UnrecognizedLevel(9))
    ));
}

#[test]
fn global_returns_same_instance() {
    let _reset = exclusive();
    assert!(std::ptr::eq(logging::global(), logging::global()));
}
