//! JSON Lines transport: one object per record, suitable for `jq` and log shippers.

use super::{LogRecord, Options, Transport};
use crate::internal;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use ulid::Ulid;

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// ULIDs sort by creation time, so concurrent writers never collide.
    id: String,
    ts: String,
    level: &'a str,
    scope: &'a str,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct JsonTransport {
    path: PathBuf,
    app_name: Option<String>,
}

impl Default for JsonTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonTransport {
    pub const NAME: &'static str = "Json";

    /// Defaults to `<state dir>/corelog/db/corelog.jsonl`.
    #[must_use]
    pub fn new() -> Self {
        let path = directories::ProjectDirs::from("", "", "corelog").map_or_else(
            || PathBuf::from("corelog.jsonl"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("db")
                    .join("corelog.jsonl")
            },
        );

        Self {
            path,
            app_name: None,
        }
    }

    /// Reads the optional `path` and `app` options.
    ///
    /// # Errors
    /// [`crate::Error::InvalidOption`] on a mistyped value.
    pub fn from_options(options: &Options) -> Result<Self, crate::Error> {
        let mut json = Self::new();
        if let Some(path) = options.str("path")? {
            json = json.path(shellexpand::tilde(path).into_owned());
        }
        if let Some(app) = options.str("app")? {
            json = json.app_name(app);
        }
        Ok(json)
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Used when the record itself carries no app name.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    fn entry<'a>(&'a self, record: &'a LogRecord) -> JsonEntry<'a> {
        JsonEntry {
            id: Ulid::new().to_string(),
            ts: record.time.to_rfc3339(),
            level: record.level.as_str(),
            scope: &record.scope,
            msg: &record.message,
            app: record.app_name.as_deref().or(self.app_name.as_deref()),
        }
    }
}

impl Transport for JsonTransport {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).inspect_err(|e| {
                internal::error(
                    "JSON",
                    &format!("Failed to create directory {}: {e}", parent.display()),
                );
            })?;
        }

        let json = serde_json::to_string(&self.entry(record))
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{json}")?;
        Ok(())
    }
}
