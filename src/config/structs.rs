//! Settings schema.

use crate::level::Level;
use crate::transport::{ConsoleTransport, Options};
use serde::{Deserialize, Serialize};

/// Applies to the whole logger rather than to one transport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Logger-wide minimum level.
    pub level: String,
    /// Stamped on every record.
    pub app_name: Option<String>,
    /// Threshold for corelog's own diagnostics (resolution failures and the like).
    pub internal_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            app_name: None,
            internal_level: "warn".to_string(),
        }
    }
}

impl GeneralSettings {
    /// Unparseable levels fall back to `info`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.level.parse().unwrap_or(Level::Info)
    }

    /// Unparseable levels fall back to `warn`.
    #[must_use]
    pub fn parse_internal_level(&self) -> Level {
        self.internal_level.parse().unwrap_or(Level::Warn)
    }
}

/// One `[[loggers]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggerDeclaration {
    /// Registry key, or export name when `module` is set.
    pub name: String,
    /// Absent means disabled.
    #[serde(default)]
    pub enabled: bool,
    /// External module providing the transport; bypasses the built-in registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default)]
    pub options: Options,
}

impl LoggerDeclaration {
    /// A disabled declaration with no module and empty options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: false,
            module: None,
            options: Options::new(),
        }
    }

    /// `{name: "Console", enabled: true, options: {}}`, used when nothing is declared.
    #[must_use]
    pub fn console_fallback() -> Self {
        Self::new(ConsoleTransport::NAME).enabled(true)
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}
