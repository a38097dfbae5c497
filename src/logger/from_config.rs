//! Shortcuts from settings to a logger with the built-in transports.

use super::Logger;
use crate::assemble::Assembler;
use crate::config::{ConfigProvider, Settings, StaticProvider};

impl Logger {
    /// Assembles the `default` profile of `provider` against the built-in registry.
    #[must_use]
    pub fn from_provider(provider: impl ConfigProvider + 'static) -> Self {
        Assembler::new(provider).assemble()
    }

    /// Assembles already-loaded settings against the built-in registry.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Assembler::new(StaticProvider::new())
            .assemble_settings(settings)
            .0
    }
}
