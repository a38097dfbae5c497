//! Sources of [`Settings`], keyed by profile name.

use super::Settings;
use crate::internal;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Profile the assembler reads.
pub const DEFAULT_PROFILE: &str = "default";

/// Hands out settings for a logical profile name.
pub trait ConfigProvider {
    /// # Errors
    /// Provider-specific; the assembler replaces a failed read with the defaults.
    fn get(&self, name: &str) -> Result<Settings, crate::Error>;
}

impl<F> ConfigProvider for F
where
    F: Fn(&str) -> Result<Settings, crate::Error>,
{
    fn get(&self, name: &str) -> Result<Settings, crate::Error> {
        self(name)
    }
}

/// Reads `<dir>/<profile>.toml`.
#[derive(Debug, Clone)]
pub struct FileProvider {
    dir: PathBuf,
}

impl FileProvider {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform config directory, e.g. `~/.config/corelog` on Linux.
    ///
    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when the platform has no config directory.
    pub fn default_location() -> Result<Self, crate::Error> {
        directories::ProjectDirs::from("", "", "corelog")
            .map(|dirs| Self::new(dirs.config_dir()))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.toml"))
    }
}

impl ConfigProvider for FileProvider {
    fn get(&self, name: &str) -> Result<Settings, crate::Error> {
        let path = self.path_for(name);
        let settings = Settings::load_from(&path)?;
        internal::debug(
            "CONFIG",
            &format!(
                "Profile '{name}' from {}: {} logger declaration(s)",
                path.display(),
                settings.loggers.len()
            ),
        );
        Ok(settings)
    }
}

/// In-memory profiles. Unknown names yield the defaults, like a missing file.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    profiles: HashMap<String, Settings>,
}

impl StaticProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, settings: Settings) -> Self {
        self.profiles.insert(name.into(), settings);
        self
    }
}

impl ConfigProvider for StaticProvider {
    fn get(&self, name: &str) -> Result<Settings, crate::Error> {
        Ok(self.profiles.get(name).cloned().unwrap_or_default())
    }
}
