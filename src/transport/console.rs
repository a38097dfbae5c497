//! The fallback transport: every assembled logger without declarations gets one of these.

use super::{LogRecord, Options, Transport};
use crate::fmt::{Color, Template, Values, paint};
use crate::level::Level;
use std::io::{self, Write};

/// Writes formatted lines to stdout, switching to stderr at `stderr_level` and above.
#[derive(Debug, Clone)]
pub struct ConsoleTransport {
    colors_enabled: bool,
    template: Template,
    timestamp_format: String,
    stderr_level: Level,
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTransport {
    pub const NAME: &'static str = "Console";

    #[must_use]
    pub fn new() -> Self {
        Self {
            colors_enabled: true,
            template: Template::parse("{timestamp} {tag} {scope}  {msg}"),
            timestamp_format: "%H:%M:%S".to_string(),
            stderr_level: Level::Warn,
        }
    }

    /// Reads `colors`, `structure`, `timestamp_format` and `stderr_level`; all optional.
    ///
    /// # Errors
    /// [`crate::Error::InvalidOption`] on a mistyped value.
    pub fn from_options(options: &Options) -> Result<Self, crate::Error> {
        let mut console = Self::new();
        if let Some(colors) = options.bool("colors")? {
            console = console.colors(colors);
        }
        if let Some(structure) = options.str("structure")? {
            console = console.structure(structure);
        }
        if let Some(format) = options.str("timestamp_format")? {
            console = console.timestamp_format(format);
        }
        if let Some(level) = options.level("stderr_level")? {
            console = console.stderr_level(level);
        }
        Ok(console)
    }

    /// Piped output and CI logs can't render ANSI escapes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn structure(mut self, template: &str) -> Self {
        self.template = Template::parse(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn stderr_level(mut self, level: Level) -> Self {
        self.stderr_level = level;
        self
    }

    fn format_record(&self, record: &LogRecord) -> String {
        let timestamp = record.time.format(&self.timestamp_format).to_string();
        let mut tag = record.tag();
        let mut scope = record.scope.clone();
        let mut timestamp_text = timestamp;

        if self.colors_enabled {
            tag = paint(&tag, Color::for_level(record.level));
            scope = format!("{}{scope}{}", Color::DIM, Color::RESET);
            timestamp_text = format!("{}{timestamp_text}{}", Color::DIM, Color::RESET);
        }

        self.template.render(&Values {
            timestamp: &timestamp_text,
            tag: &tag,
            level: record.level.as_str(),
            scope: &scope,
            msg: &record.message,
            app: record.app_name.as_deref().unwrap_or_default(),
        })
    }
}

impl Transport for ConsoleTransport {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let line = self.format_record(record);
        if self.stderr_level.admits(record.level) {
            writeln!(io::stderr(), "{line}")?;
        } else {
            writeln!(io::stdout(), "{line}")?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
