//! Settings: the TOML schema, `source = "..."` include resolution, and the providers that hand
//! settings to the assembler by profile name.
//!
//! Defaults are applied when settings are produced, so consumers always see a populated
//! `loggers` list: a file without declarations (or with an empty list) yields the single
//! console fallback.

mod provider;
mod structs;

pub use provider::{ConfigProvider, DEFAULT_PROFILE, FileProvider, StaticProvider};
pub use structs::{GeneralSettings, LoggerDeclaration};

use crate::internal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one profile configures.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    /// Parsed as-is; the console fallback is substituted after includes are merged.
    #[serde(default)]
    pub loggers: Vec<LoggerDeclaration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            loggers: vec![LoggerDeclaration::console_fallback()],
        }
    }
}

/// Pulls `source = "..."` lines out of the raw text before TOML parsing, since they are not
/// valid TOML keys once repeated. Returns the include paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::with_capacity(content.len());

    for line in content.lines() {
        let trimmed = line.trim();
        let include = trimmed
            .strip_prefix("source")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));

        if let Some(value) = include {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Settings {
    /// Parses one document (no include resolution) and applies defaults.
    ///
    /// # Errors
    /// TOML syntax or schema errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings.with_defaults())
    }

    /// Loads `path` with all includes resolved. A missing file yields the defaults.
    ///
    /// # Errors
    /// Read or parse failures, or an include cycle.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let settings = Self::load_with_sources(path, &mut HashSet::new())?;
        Ok(settings.with_defaults())
    }

    /// `stack` holds the files currently being included, so a file reached twice through
    /// different branches is fine. Only a file that includes itself, directly or not, is a cycle.
    fn load_with_sources(path: &Path, stack: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::empty());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !stack.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let loaded = Self::read_with_sources(path, stack);
        stack.remove(&canonical);
        loaded
    }

    fn read_with_sources(path: &Path, stack: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut settings: Self = toml::from_str(&toml_content)?;

        for source in sources {
            let expanded = shellexpand::tilde(&source).into_owned();
            let source_path = PathBuf::from(expanded);
            if source_path.exists() {
                internal::debug("CONFIG", &format!("Including {}", source_path.display()));
                let included = Self::load_with_sources(&source_path, stack)?;
                settings.merge(included);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source}"));
            }
        }

        Ok(settings)
    }

    /// Appends included declarations after this file's own. A name already declared here
    /// wins over the include; repeated names within the include are all kept. Only `loggers`
    /// are taken from an include, its `[general]` table is ignored.
    pub fn merge(&mut self, other: Self) {
        let declared: HashSet<String> = self.loggers.iter().map(|d| d.name.clone()).collect();
        self.loggers.extend(
            other
                .loggers
                .into_iter()
                .filter(|d| !declared.contains(&d.name)),
        );
    }

    /// Effective declarations: the configured list, or the console fallback when empty.
    #[must_use]
    pub fn declarations(&self) -> Vec<LoggerDeclaration> {
        if self.loggers.is_empty() {
            vec![LoggerDeclaration::console_fallback()]
        } else {
            self.loggers.clone()
        }
    }

    fn with_defaults(mut self) -> Self {
        if self.loggers.is_empty() {
            self.loggers.push(LoggerDeclaration::console_fallback());
        }
        self
    }

    fn empty() -> Self {
        Self {
            general: GeneralSettings::default(),
            loggers: Vec::new(),
        }
    }
}
