use std::process::{Command, Output};

fn levellog(args: &[&str], env: &[(&str, &str)]) -> Output {
    let path = env!("CARGO_BIN_EXE_levellog");
    let mut command = Command::new(path);
    command
        .args(args)
        .env_remove("LEVELLOG_THRESHOLD")
        .env_remove("LEVELLOG_SYSLOG_FACILITY")
        .env_remove("LEVELLOG_SYSLOG_TAG");
    for (key, value) in env {
        command.env(key, value);
    }
    command
        .output()
        .unwrap_or_else(|error| panic!("failed to run {path}: {error}"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn help_lists_usage() {
    let output = levellog(&["--help"], &[]);
    assert!(output.status.success(), "--help should succeed");
    assert!(output.stderr.is_empty(), "help should not write to stderr");
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("levellog"));
}

#[test]
fn message_is_printed_unprefixed_on_stdout() {
    let output = levellog(&["info", "service", "started"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "service started\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn every_non_fatal_level_prints_under_default_threshold() {
    for level in ["debug", "info", "warning", "error"] {
        let output = levellog(&[level, "x"], &[]);
        assert!(output.status.success(), "{level} should succeed");
        assert_eq!(stdout_of(&output), "x\n", "{level}");
    }
}

#[test]
fn below_threshold_prints_nothing() {
    let output = levellog(&["--threshold", "warning", "info", "x"], &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let output = levellog(&["--threshold", "warning", "error", "y"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "y\n");
}

#[test]
fn threshold_is_read_from_environment() {
    let env = [("LEVELLOG_THRESHOLD", "error")];
    let output = levellog(&["warning", "hidden"], &env);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let output = levellog(&["error", "shown"], &env);
    assert_eq!(stdout_of(&output), "shown\n");
}

#[test]
fn flag_overrides_environment_threshold() {
    let output = levellog(
        &["--threshold", "debug", "info", "shown"],
        &[("LEVELLOG_THRESHOLD", "fatal")],
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "shown\n");
}
