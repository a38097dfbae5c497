//! Where transport constructors come from.
//!
//! A declaration without `module` is looked up by name in a [`TransportRegistry`]. A
//! declaration with `module = "x"` asks a [`ModuleLoader`] for module `x` and takes the export
//! named after the declaration. Modules are registered up front in a [`ModuleTable`]; nothing is
//! loaded from disk at runtime.

mod module;

pub use module::{ModuleLoader, ModuleTable, TransportModule};

use crate::transport::{ConsoleTransport, FileTransport, JsonTransport, Options, Transport};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type FactoryFn = dyn Fn(&Options) -> Result<Box<dyn Transport>, crate::Error> + Send + Sync;

/// A transport constructor. Cheap to clone; closures may capture state.
#[derive(Clone)]
pub struct TransportFactory(Arc<FactoryFn>);

impl TransportFactory {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Options) -> Result<Box<dyn Transport>, crate::Error> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Builds a transport from its declaration options.
    ///
    /// # Errors
    /// Whatever validation error the transport's constructor reports.
    pub fn construct(&self, options: &Options) -> Result<Box<dyn Transport>, crate::Error> {
        (self.0)(options)
    }
}

impl fmt::Debug for TransportFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransportFactory")
    }
}

/// Built-in constructors keyed by transport name. Names are case-sensitive, like the
/// `name` field in settings.
#[derive(Debug, Clone, Default)]
pub struct TransportRegistry {
    factories: HashMap<String, TransportFactory>,
}

impl TransportRegistry {
    /// An empty registry; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `Console`, `File` and `Json`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with(ConsoleTransport::NAME, |options| {
                Ok(Box::new(ConsoleTransport::from_options(options)?))
            })
            .with(FileTransport::NAME, |options| {
                Ok(Box::new(FileTransport::from_options(options)?))
            })
            .with(JsonTransport::NAME, |options| {
                Ok(Box::new(JsonTransport::from_options(options)?))
            })
    }

    /// Registers `f` under `name`, replacing any previous entry.
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Options) -> Result<Box<dyn Transport>, crate::Error> + Send + Sync + 'static,
    {
        self.register(name, TransportFactory::new(f));
        self
    }

    pub fn register(&mut self, name: impl Into<String>, factory: TransportFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Pure lookup; `None` is the normal "not found" outcome.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TransportFactory> {
        self.factories.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted for stable diagnostics.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
