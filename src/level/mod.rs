//! Severity levels shared by the logger threshold and per-transport thresholds.
//!
//! The same names are accepted everywhere a level appears: `[general] level`,
//! `internal_level`, a declaration's `level` option, the console `stderr_level` option and
//! the CLI. Parsing is case-insensitive and knows a few common aliases.

use std::fmt;
use std::str::FromStr;

/// Ordered so a record's level can be compared against any configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Per-record detail. corelog uses it for skipped declarations.
    Trace = 0,
    /// Also accepted as `verbose`. Attachments and include resolution log here.
    Debug = 1,
    /// Production default for the logger threshold.
    #[default]
    Info = 2,
    /// Also accepted as `warning`. Failed declarations and unreadable profiles land here,
    /// and it is where the console transport starts writing to stderr.
    Warn = 3,
    /// Also accepted as `err`.
    Error = 4,
}

impl Level {
    /// Lowercase form used in settings files, transport options and JSON records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Uppercase label rendered inside `{tag}`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Whether a record at `record` passes a threshold of `self`.
    #[must_use]
    pub const fn admits(self, record: Self) -> bool {
        record as u8 >= self as u8
    }

    /// Every level, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized level name. Transport options turn it into
/// [`Error::InvalidOption`](crate::Error::InvalidOption); settings fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" | "verbose" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
