//! Unified error type for configuration, resolution and registration failures.

use std::path::PathBuf;

/// Error type for corelog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML settings parsing error.
    ConfigParse(toml::de::Error),
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Cyclic `source = "..."` include.
    CyclicInclude(PathBuf),
    /// Serialization error inside a transport.
    Format(String),
    /// A transport option has the wrong type or an unusable value.
    InvalidOption { key: String, reason: String },
    /// A transport option the constructor cannot do without.
    MissingOption(String),
    /// No built-in transport registered under this name.
    UnknownTransport(String),
    /// No external module registered under this name.
    ModuleNotFound(String),
    /// The module exists but failed to initialize.
    ModuleLoad { module: String, reason: String },
    /// The module loaded but has no export matching the declaration name.
    MissingExport { module: String, export: String },
    /// A module initializer or transport constructor panicked.
    Panicked(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::InvalidOption { key, reason } => write!(f, "invalid option '{key}': {reason}"),
            Self::MissingOption(key) => write!(f, "missing required option '{key}'"),
            Self::UnknownTransport(name) => write!(f, "unknown transport: {name}"),
            Self::ModuleNotFound(module) => write!(f, "module not found: {module}"),
            Self::ModuleLoad { module, reason } => {
                write!(f, "failed to load module {module}: {reason}")
            }
            Self::MissingExport { module, export } => {
                write!(f, "module {module} has no export named {export}")
            }
            Self::Panicked(message) => write!(f, "panicked: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
