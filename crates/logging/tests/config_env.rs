//! Integration tests for loading configuration and applying it to a logger.

use std::collections::HashMap;
use std::sync::Arc;

use logging::{
    ConfigError, LevelLogger, LoggerConfig, RecordingTerminator, Severity, SinkKind,
    THRESHOLD_ENV,
};
use test_support::RecordingSink;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn threshold_aliases_are_accepted() {
    for (raw, expected) in [
        ("debug", Severity::Debug),
        ("Info", Severity::Info),
        ("warn", Severity::Warning),
        ("err", Severity::Error),
        ("crit", Severity::Fatal),
        ("2", Severity::Warning),
    ] {
        let vars = env(&[(THRESHOLD_ENV, raw)]);
        let config = LoggerConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.threshold, expected, "input {raw:?}");
    }
}

#[test]
fn invalid_threshold_names_the_variable() {
    let vars = env(&[(THRESHOLD_ENV, "7")]);
    let err = LoggerConfig::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
    assert!(err.to_string().contains(THRESHOLD_ENV));
}

#[test]
fn stdout_config_resets_previous_sink() {
    let logger = LevelLogger::with_terminator(Arc::new(RecordingTerminator::default()));
    logger.set_sink(Arc::new(RecordingSink::default()));
    logger.set_threshold(Severity::Fatal);

    let config = LoggerConfig {
        threshold: Severity::Warning,
        sink: SinkKind::Stdout,
    };
    config.apply(&logger).unwrap();

    assert!(!logger.has_sink());
    assert_eq!(logger.threshold(), Severity::Warning);
}

#[cfg(unix)]
#[test]
fn bad_facility_leaves_logger_untouched() {
    let logger = LevelLogger::with_terminator(Arc::new(RecordingTerminator::default()));
    logger.set_threshold(Severity::Error);

    let config = LoggerConfig {
        threshold: Severity::Debug,
        sink: SinkKind::Syslog {
            facility: "nonsense".to_owned(),
            tag: "t".to_owned(),
        },
    };
    let err = config.apply(&logger).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFacility("nonsense".to_owned()));
    assert_eq!(logger.threshold(), Severity::Error);
}

#[cfg(unix)]
#[test]
fn syslog_config_can_replace_another_syslog_config() {
    let logger = LevelLogger::with_terminator(Arc::new(RecordingTerminator::default()));
    let syslog = |facility: &str, tag: &str| LoggerConfig {
        threshold: Severity::Debug,
        sink: SinkKind::Syslog {
            facility: facility.to_owned(),
            tag: tag.to_owned(),
        },
    };

    syslog("local1", "levellog-alpha").apply(&logger).unwrap();
    logger.info("levellog test one").unwrap();
    syslog("local2", "levellog-beta").apply(&logger).unwrap();

    // The first sink is gone now; the second must still be able to write.
    assert!(logger.has_sink());
    logger.info("levellog test two").unwrap();
}
