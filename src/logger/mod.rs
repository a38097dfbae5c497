//! The logging engine: a sink registry that fans each record out to its attached transports.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::level::Level;
use crate::registry::TransportFactory;
use crate::transport::{LogRecord, Options, Transport};

/// The registration surface the assembler drives. [`Logger`] is the real implementation;
/// tests substitute recording engines.
pub trait Engine {
    /// Constructs a transport from `options` and attaches it.
    ///
    /// # Errors
    /// Invalid options, either the common `level` option or ones the factory validates.
    fn add(&mut self, factory: &TransportFactory, options: &Options) -> Result<(), crate::Error>;
}

struct Attached {
    transport: Box<dyn Transport>,
    /// From the declaration's `level` option; `None` inherits the logger threshold.
    min_level: Option<Level>,
}

/// Assembled once at startup and read-only afterwards, so `&Logger` is all callers need.
#[derive(Default)]
pub struct Logger {
    min_level: Level,
    transports: Vec<Attached>,
    app_name: Option<String>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Filters by the logger threshold, then by each transport's own threshold.
    /// Write errors are dropped: one broken sink must not silence the others.
    pub fn log(&self, level: Level, scope: &str, msg: &str) {
        if !self.min_level.admits(level) || self.transports.is_empty() {
            return;
        }

        let record = LogRecord::new(level, scope, msg).app_name(self.app_name.clone());

        for attached in &self.transports {
            if attached.min_level.is_some_and(|min| !min.admits(level)) {
                continue;
            }
            let _ = attached.transport.write(&record);
        }
    }

    pub fn trace(&self, scope: &str, msg: &str) {
        self.log(Level::Trace, scope, msg);
    }

    pub fn debug(&self, scope: &str, msg: &str) {
        self.log(Level::Debug, scope, msg);
    }

    pub fn info(&self, scope: &str, msg: &str) {
        self.log(Level::Info, scope, msg);
    }

    pub fn warn(&self, scope: &str, msg: &str) {
        self.log(Level::Warn, scope, msg);
    }

    pub fn error(&self, scope: &str, msg: &str) {
        self.log(Level::Error, scope, msg);
    }

    /// # Errors
    /// Returns the first I/O error encountered across all transports.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for attached in &self.transports {
            attached.transport.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    #[must_use]
    pub fn transport_count(&self) -> usize {
        self.transports.len()
    }

    /// Attachment order is preserved.
    #[must_use]
    pub fn transport_names(&self) -> Vec<&str> {
        self.transports.iter().map(|a| a.transport.name()).collect()
    }

    fn attach(&mut self, transport: Box<dyn Transport>, min_level: Option<Level>) {
        self.transports.push(Attached {
            transport,
            min_level,
        });
    }
}

impl Engine for Logger {
    fn add(&mut self, factory: &TransportFactory, options: &Options) -> Result<(), crate::Error> {
        // Validate the common option before constructing, so a bad level never
        // leaves a half-opened sink behind.
        let min_level = options.level("level")?;
        let transport = factory.construct(options)?;
        self.attach(transport, min_level);
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("transports", &self.transport_names())
            .field("app_name", &self.app_name)
            .finish()
    }
}
