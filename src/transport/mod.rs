//! Output sinks. The three built-ins (console, file, JSONL) are registered by name in
//! [`TransportRegistry::builtin`](crate::registry::TransportRegistry::builtin); anything else
//! implements [`Transport`] and is registered alongside them or exported from a module.

mod console;
mod file;
mod json;
mod options;

pub use console::ConsoleTransport;
pub use file::FileTransport;
pub use json::JsonTransport;
pub use options::Options;

use crate::level::Level;
use chrono::{DateTime, Local};

/// Everything a transport needs to render one log line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub scope: String,
    pub message: String,
    /// Set from the logger's app name when one is configured.
    pub app_name: Option<String>,
    /// Captured once at dispatch so every transport prints the same instant.
    pub time: DateTime<Local>,
}

impl LogRecord {
    #[must_use]
    pub fn new(level: Level, scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            scope: scope.into(),
            message: message.into(),
            app_name: None,
            time: Local::now(),
        }
    }

    #[must_use]
    pub fn app_name(mut self, name: Option<String>) -> Self {
        self.app_name = name;
        self
    }

    /// Bracketed level label, e.g. `[WARN]`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("[{}]", self.level.label())
    }
}

/// A registered sink. `Send + Sync` so the assembled logger can be shared as a `&'static`.
pub trait Transport: Send + Sync {
    /// Name shown in diagnostics and `Logger::transport_names`.
    fn name(&self) -> &str;

    /// Renders and emits one record.
    ///
    /// # Errors
    /// I/O or serialization errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
