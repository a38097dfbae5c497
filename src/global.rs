//! The process-wide logger. Initialized explicitly, once, then shared as `&'static`.

use crate::assemble::Assembler;
use crate::config::{FileProvider, Settings};
use crate::logger::Logger;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Assembles and installs the process logger. Only the first call assembles; later calls
/// return the installed logger and leave `assembler` unused.
pub fn init(assembler: &Assembler) -> &'static Logger {
    LOGGER.get_or_init(|| assembler.assemble())
}

/// [`init`] from settings the caller already fetched, typically via
/// [`Assembler::settings`].
pub fn init_with_settings(assembler: &Assembler, settings: &Settings) -> &'static Logger {
    LOGGER.get_or_init(|| assembler.assemble_settings(settings).0)
}

/// [`init`] with the `default` profile from the platform config directory. Without a config
/// directory, the process gets the console fallback.
pub fn init_default() -> &'static Logger {
    LOGGER.get_or_init(|| match FileProvider::default_location() {
        Ok(provider) => Assembler::new(provider).assemble(),
        Err(e) => {
            crate::internal::warn("GLOBAL", &format!("{e}, using console fallback"));
            Assembler::new(crate::config::StaticProvider::new()).assemble()
        }
    })
}

/// The installed logger, if [`init`] has run.
#[must_use]
pub fn get() -> Option<&'static Logger> {
    LOGGER.get()
}
