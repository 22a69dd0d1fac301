//! crates/logging/src/levels.rs
//! Severity ordering and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{LogError, SeverityParseError};

/// Message severity, ordered `Debug < Info < Warning < Error < Fatal`.
///
/// The ordering is the gating rule: a message is emitted when its severity is
/// at or above the logger's threshold. Each variant has a stable ordinal
/// (0 through 4) used by configuration surfaces that speak in numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained diagnostics. The default threshold.
    #[default]
    Debug = 0,
    /// Normal operational messages.
    Info = 1,
    /// Something unexpected that the program recovered from.
    Warning = 2,
    /// An operation failed.
    Error = 3,
    /// The program cannot continue; writing one terminates the process.
    Fatal = 4,
}

impl Severity {
    /// Every severity in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the severity with the given ordinal, or `None` outside `0..=4`.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Returns the ordinal of this severity.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Upper-case label, e.g. `WARNING`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Reports whether a message of this severity passes `threshold`.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(ordinal: u8) -> Result<Self, LogError> {
        Self::from_ordinal(ordinal).ok_or(LogError::UnrecognizedLevel(ordinal))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.ordinal()
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    /// Accepts names (`debug`, `info`, `warning`/`warn`, `error`/`err`,
    /// `fatal`/`crit`/`critical`) in any ASCII case, or a single ordinal digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "debug" | "0" => Some(Self::Debug),
            "info" | "1" => Some(Self::Info),
            "warning" | "warn" | "2" => Some(Self::Warning),
            "error" | "err" | "3" => Some(Self::Error),
            "fatal" | "crit" | "critical" | "4" => Some(Self::Fatal),
            _ => None,
        };
        parsed.ok_or_else(|| SeverityParseError::new(trimmed))
    }
}
