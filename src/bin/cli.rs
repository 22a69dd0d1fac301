//! `logger(1)`-style front end: writes one message through the process-wide
//! logger and maps the outcome to an exit status.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use logging::{DEFAULT_SYSLOG_FACILITY, DEFAULT_SYSLOG_TAG, LoggerConfig, Severity, SinkKind};

const PROGRAM_NAME: &str = "levellog";

/// Exit status for bad arguments or configuration.
const USAGE_EXIT: u8 = 2;
/// Exit status when the sink rejected the message.
const SINK_EXIT: u8 = 1;

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Write a message through a leveled logger")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .value_name("LEVEL")
                .help("Minimum severity to emit (overrides LEVELLOG_THRESHOLD)")
                .value_parser(|raw: &str| raw.parse::<Severity>()),
        )
        .arg(
            Arg::new("syslog")
                .long("syslog")
                .help("Send the message to syslog instead of stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("facility")
                .long("facility")
                .value_name("NAME")
                .help("syslog facility (implies --syslog)"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .value_name("TAG")
                .help("syslog tag (implies --syslog)"),
        )
        .arg(
            Arg::new("level")
                .value_name("LEVEL")
                .help("debug, info, warning, error, or fatal")
                .required(true)
                .value_parser(|raw: &str| raw.parse::<Severity>()),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .required(true)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
}

#[derive(Debug, Eq, PartialEq)]
struct Invocation {
    config: LoggerConfig,
    level: Severity,
    message: String,
}

/// Merges command line flags over `config`.
fn invocation_from(matches: &clap::ArgMatches, mut config: LoggerConfig) -> Invocation {
    if let Some(threshold) = matches.get_one::<Severity>("threshold") {
        config.threshold = *threshold;
    }

    let facility = matches.get_one::<String>("facility").cloned();
    let tag = matches.get_one::<String>("tag").cloned();
    if matches.get_flag("syslog") || facility.is_some() || tag.is_some() {
        let (env_facility, env_tag) = match config.sink {
            SinkKind::Syslog { facility, tag } => (Some(facility), Some(tag)),
            SinkKind::Stdout => (None, None),
        };
        config.sink = SinkKind::Syslog {
            facility: facility
                .or(env_facility)
                .unwrap_or_else(|| DEFAULT_SYSLOG_FACILITY.to_owned()),
            tag: tag
                .or(env_tag)
                .unwrap_or_else(|| DEFAULT_SYSLOG_TAG.to_owned()),
        };
    }

    let level = matches
        .get_one::<Severity>("level")
        .copied()
        .unwrap_or_default();
    let message = matches
        .get_many::<String>("message")
        .map(|parts| parts.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    Invocation {
        config,
        level,
        message,
    }
}

/// Parses `args`, configures the process-wide logger, and writes the message.
///
/// A fatal message never returns: the logger exits the process with status 1.
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let rendered = error.render();
            if error.use_stderr() {
                let _ = write!(stderr, "{rendered}");
                return ExitCode::from(USAGE_EXIT);
            }
            let _ = write!(stdout, "{rendered}");
            return ExitCode::SUCCESS;
        }
    };

    let config = match LoggerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            return ExitCode::from(USAGE_EXIT);
        }
    };
    let invocation = invocation_from(&matches, config);

    if let Err(error) = invocation.config.apply(logging::global()) {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
        return ExitCode::from(USAGE_EXIT);
    }

    let _ = stdout.flush();
    match logging::write(invocation.level, &invocation.message) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            ExitCode::from(SINK_EXIT)
        }
    }
}
