//! corelog's own diagnostics: a stderr console logger kept in a `OnceLock`.
//!
//! Until [`init_with_settings`] (or [`init`]) runs, every call here is dropped. That is the
//! "silently dropped" mode for resolution failures; embedding applications that want them
//! reported initialize this first.

use crate::config::Settings;
use crate::level::Level;
use crate::logger::Logger;
use crate::transport::ConsoleTransport;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initializes with default settings (`warn` threshold). Only the first init takes effect.
pub fn init() {
    init_with_settings(&Settings::default());
}

/// Initializes at `general.internal_level`. Only the first init takes effect.
pub fn init_with_settings(settings: &Settings) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(settings));
    if !was_init {
        debug(
            "INTERNAL",
            &format!(
                "Internal logger ready at {}",
                settings.general.parse_internal_level()
            ),
        );
    }
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn build_internal_logger(settings: &Settings) -> Logger {
    Logger::builder()
        .level(settings.general.parse_internal_level())
        .app_name("corelog")
        .transport(
            ConsoleTransport::new()
                .structure("corelog {tag} {scope}  {msg}")
                .stderr_level(Level::Trace),
        )
        .build()
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, scope, msg);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
