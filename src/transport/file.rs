//! Append-only text log file.

use super::{LogRecord, Options, Transport};
use crate::fmt::{Template, Values};
use crate::internal;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileTransport {
    path: PathBuf,
    template: Template,
    timestamp_format: String,
}

impl FileTransport {
    pub const NAME: &'static str = "File";

    /// `path` may start with `~`.
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: PathBuf::from(shellexpand::tilde(path.as_ref()).into_owned()),
            template: Template::parse("{timestamp} {tag} {scope}  {msg}"),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }

    /// `filename` is required; `structure` and `timestamp_format` are optional.
    ///
    /// # Errors
    /// [`crate::Error::MissingOption`] without `filename`, [`crate::Error::InvalidOption`]
    /// on a mistyped value.
    pub fn from_options(options: &Options) -> Result<Self, crate::Error> {
        let mut file = Self::new(options.require_str("filename")?);
        if let Some(structure) = options.str("structure")? {
            file = file.structure(structure);
        }
        if let Some(format) = options.str("timestamp_format")? {
            file = file.timestamp_format(format);
        }
        Ok(file)
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
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let timestamp = record.time.format(&self.timestamp_format).to_string();
        let tag = record.tag();
        let mut line = self.template.render(&Values {
            timestamp: &timestamp,
            tag: &tag,
            level: record.level.as_str(),
            scope: &record.scope,
            msg: &record.message,
            app: record.app_name.as_deref().unwrap_or_default(),
        });
        line.push('\n');
        line
    }
}

impl Transport for FileTransport {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(
                    "FILE",
                    &format!("Failed to create directory {}: {e}", parent.display()),
                );
                return Err(e.into());
            }
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }

        // One write per line keeps concurrent appenders from interleaving mid-line.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(self.format_line(record).as_bytes())?;
        Ok(())
    }
}
