//! syslog(3) backend.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate. Messages keep their bytes untouched; the severity
//! travels as the syslog priority, so no textual label is added.

use std::ffi::{CStr, CString};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::error::SinkError;
use crate::sink::Sink;

/// Syslog facility codes matching the POSIX syslog(3) constants.
///
/// Each variant corresponds to a `LOG_*` facility from `<syslog.h>`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// Kernel messages (LOG_KERN).
    Kern = libc::LOG_KERN,
    /// User-level messages (LOG_USER), the default for application logging.
    #[default]
    User = libc::LOG_USER,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Line printer subsystem (LOG_LPR).
    Lpr = libc::LOG_LPR,
    /// Network news subsystem (LOG_NEWS).
    News = libc::LOG_NEWS,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = libc::LOG_UUCP,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    const NAMES: [(&'static str, Self); 18] = [
        ("kern", Self::Kern),
        ("user", Self::User),
        ("mail", Self::Mail),
        ("daemon", Self::Daemon),
        ("auth", Self::Auth),
        ("syslog", Self::Syslog),
        ("lpr", Self::Lpr),
        ("news", Self::News),
        ("uucp", Self::Uucp),
        ("cron", Self::Cron),
        ("local0", Self::Local0),
        ("local1", Self::Local1),
        ("local2", Self::Local2),
        ("local3", Self::Local3),
        ("local4", Self::Local4),
        ("local5", Self::Local5),
        ("local6", Self::Local6),
        ("local7", Self::Local7),
    ];

    /// Parses a facility name, ignoring ASCII case and surrounding whitespace.
    ///
    /// Returns `None` for unrecognised names.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("daemon"), Some(SyslogFacility::Daemon));
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("unknown"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, facility)| *facility)
    }

    /// Returns the lowercase facility name.
    pub fn as_str(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, facility)| *facility == self)
            .map_or("user", |(name, _)| name)
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub use crate::{DEFAULT_SYSLOG_FACILITY, DEFAULT_SYSLOG_TAG};

const DEFAULT_IDENT: &CStr = c"levellog";

/// Number of live [`SyslogGuard`]s. Serializes every `openlog`/`syslog`/
/// `closelog` call so a message is always sent with its own sink's ident.
static CONNECTION: Mutex<usize> = Mutex::new(0);

fn connection() -> MutexGuard<'static, usize> {
    CONNECTION
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

/// Returns a process-lifetime copy of `tag` suitable as an `openlog` ident.
///
/// openlog(3) keeps the pointer, so idents are leaked once per distinct tag
/// and never freed. A tag containing a NUL byte maps to [`DEFAULT_SYSLOG_TAG`].
fn intern_ident(tag: &str) -> &'static CStr {
    static IDENTS: Mutex<Vec<&'static CStr>> = Mutex::new(Vec::new());

    let Ok(owned) = CString::new(tag) else {
        return DEFAULT_IDENT;
    };
    let mut idents = IDENTS
        .lock()
        .unwrap_or_else(|poison| poison.into_inner());
    if let Some(ident) = idents
        .iter()
        .copied()
        .find(|ident| *ident == owned.as_c_str())
    {
        return ident;
    }
    let ident: &'static CStr = Box::leak(owned.into_boxed_c_str());
    idents.push(ident);
    ident
}

/// Facility and tag (ident) used when opening the syslog connection.
///
/// Constructing a [`SyslogConfig`] does not open anything; call
/// [`open`](SyslogConfig::open) or [`SyslogSink::open`].
///
/// # Examples
///
/// ```
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Local5, "billing");
/// assert_eq!(config.facility(), SyslogFacility::Local5);
/// assert_eq!(config.tag(), "billing");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a configuration with the given facility and tag.
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// Returns the configured facility.
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Opens the syslog connection and returns a guard holding this
    /// configuration's ident and facility.
    ///
    /// Several guards may be alive at once, each with its own tag; the
    /// connection is closed when the last one is dropped. A tag containing a
    /// NUL byte falls back to [`DEFAULT_SYSLOG_TAG`].
    pub fn open(&self) -> SyslogGuard {
        let ident = intern_ident(&self.tag);
        let facility = self.facility as libc::c_int;

        let mut open = connection();
        // SAFETY: `ident` is leaked and lives for the rest of the process,
        // which is what openlog(3) requires.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, facility);
        }
        *open += 1;

        SyslogGuard { ident, facility }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_TAG)
    }
}

/// Syslog priority levels matching POSIX syslog(3) severity constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// System is unusable (LOG_EMERG).
    Emergency = libc::LOG_EMERG,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = libc::LOG_ALERT,
    /// Critical conditions (LOG_CRIT).
    Critical = libc::LOG_CRIT,
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

fn c_message(message: &str) -> Result<CString, SinkError> {
    CString::new(message).map_err(|_| SinkError::InvalidMessage {
        reason: "interior NUL byte",
    })
}

/// Sends `message` to syslog(3) with the given priority.
///
/// Uses the ident and facility of the most recent `openlog` call, or the
/// program name and `LOG_USER` if syslog was never opened. Prefer
/// [`SyslogGuard::send`], which pins both.
pub fn syslog_message(priority: SyslogPriority, message: &str) -> Result<(), SinkError> {
    let c_message = c_message(message)?;
    let _open = connection();
    // `%s` keeps `%` sequences inside the message from being read as
    // format directives.
    // SAFETY: both pointers are valid NUL-terminated strings for the duration
    // of the call.
    unsafe {
        libc::syslog(priority as libc::c_int, c"%s".as_ptr(), c_message.as_ptr());
    }
    Ok(())
}

/// Handle on the process-wide syslog connection.
///
/// Dropping the last live guard closes the connection.
#[derive(Debug)]
pub struct SyslogGuard {
    ident: &'static CStr,
    facility: libc::c_int,
}

impl SyslogGuard {
    /// Returns the ident messages sent through this guard carry.
    pub fn ident(&self) -> &str {
        self.ident.to_str().unwrap_or(DEFAULT_SYSLOG_TAG)
    }

    /// Sends `message` with this guard's ident and facility.
    ///
    /// Another guard may have reopened the connection with a different tag
    /// in the meantime, so the ident is re-applied under the connection lock
    /// before each message.
    pub fn send(&self, priority: SyslogPriority, message: &str) -> Result<(), SinkError> {
        let c_message = c_message(message)?;
        let _open = connection();
        // SAFETY: `ident` is leaked for the process lifetime and both format
        // arguments are valid NUL-terminated strings for the duration of the
        // call.
        unsafe {
            libc::openlog(self.ident.as_ptr(), libc::LOG_PID, self.facility);
            libc::syslog(priority as libc::c_int, c"%s".as_ptr(), c_message.as_ptr());
        }
        Ok(())
    }
}

impl Drop for SyslogGuard {
    fn drop(&mut self) {
        let mut open = connection();
        *open = open.saturating_sub(1);
        if *open == 0 {
            // SAFETY: closelog has no preconditions.
            unsafe {
                libc::closelog();
            }
        }
    }
}

/// [`Sink`] that forwards each message to syslog(3).
///
/// Each sink keeps its own tag and facility, so one sink can replace another
/// without either losing its ident. The shared connection stays open until
/// the last sink is dropped.
///
/// | Sink method | Priority |
/// |-------------|----------|
/// | `debug`     | `LOG_DEBUG` |
/// | `info`      | `LOG_INFO` |
/// | `warning`   | `LOG_WARNING` |
/// | `error`     | `LOG_ERR` |
/// | `critical`  | `LOG_CRIT` |
///
/// ```no_run
/// use std::sync::Arc;
/// use logging_sink::Sink;
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility, SyslogSink};
///
/// let sink = Arc::new(SyslogSink::open(SyslogConfig::new(SyslogFacility::Daemon, "svc")));
/// sink.info("service started").unwrap();
/// ```
#[derive(Debug)]
pub struct SyslogSink {
    config: SyslogConfig,
    guard: SyslogGuard,
}

impl SyslogSink {
    /// Opens syslog with `config` and returns a sink bound to it.
    pub fn open(config: SyslogConfig) -> Self {
        let guard = config.open();
        Self { config, guard }
    }

    /// Returns the configuration the sink was opened with.
    pub fn config(&self) -> &SyslogConfig {
        &self.config
    }
}

impl Sink for SyslogSink {
    fn debug(&self, msg: &str) -> Result<(), SinkError> {
        self.guard.send(SyslogPriority::Debug, msg)
    }

    fn info(&self, msg: &str) -> Result<(), SinkError> {
        self.guard.send(SyslogPriority::Info, msg)
    }

    fn warning(&self, msg: &str) -> Result<(), SinkError> {
        self.guard.send(SyslogPriority::Warning, msg)
    }

    fn error(&self, msg: &str) -> Result<(), SinkError> {
        self.guard.send(SyslogPriority::Error, msg)
    }

    fn critical(&self, msg: &str) -> Result<(), SinkError> {
        self.guard.send(SyslogPriority::Critical, msg)
    }
}
