//! Programmatic construction, for callers that don't go through settings.

use super::Logger;
use crate::level::Level;
use crate::transport::Transport;

#[derive(Default)]
pub struct LoggerBuilder {
    min_level: Level,
    transports: Vec<(Box<dyn Transport>, Option<Level>)>,
    app_name: Option<String>,
}

impl LoggerBuilder {
    /// Info threshold, no transports.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Stamped on every record as `{app}` / the JSON `app` field.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transports.push((Box::new(transport), None));
        self
    }

    /// Like [`transport`](Self::transport) with its own minimum level.
    #[must_use]
    pub fn transport_at(mut self, transport: impl Transport + 'static, level: Level) -> Self {
        self.transports.push((Box::new(transport), Some(level)));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut logger = Logger {
            min_level: self.min_level,
            transports: Vec::with_capacity(self.transports.len()),
            app_name: self.app_name,
        };
        for (transport, level) in self.transports {
            logger.attach(transport, level);
        }
        logger
    }
}
