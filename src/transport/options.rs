//! Free-form construction parameters from a `[loggers.options]` table.

use crate::Error;
use crate::level::Level;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Passed verbatim to a transport factory and to `Engine::add`. Typed accessors report
/// mismatches as [`Error::InvalidOption`] so a bad value becomes a registration failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chained insert, mostly for programmatic declarations and tests.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// # Errors
    /// [`Error::InvalidOption`] if the value is present but not a string.
    pub fn str(&self, key: &str) -> Result<Option<&str>, Error> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(mismatch(key, "a string", other)),
        }
    }

    /// # Errors
    /// [`Error::MissingOption`] when absent, [`Error::InvalidOption`] when not a string.
    pub fn require_str(&self, key: &str) -> Result<&str, Error> {
        self.str(key)?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::MissingOption(key.to_string()))
    }

    /// # Errors
    /// [`Error::InvalidOption`] if the value is present but not a boolean.
    pub fn bool(&self, key: &str) -> Result<Option<bool>, Error> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(mismatch(key, "a boolean", other)),
        }
    }

    /// # Errors
    /// [`Error::InvalidOption`] if the value is not a string or names no known level.
    pub fn level(&self, key: &str) -> Result<Option<Level>, Error> {
        self.str(key)?
            .map(|s| {
                s.parse::<Level>().map_err(|e| Error::InvalidOption {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}

fn mismatch(key: &str, expected: &str, found: &Value) -> Error {
    Error::InvalidOption {
        key: key.to_string(),
        reason: format!("expected {expected}, found {found}"),
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}
