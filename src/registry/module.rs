//! Externally supplied transports, grouped into named modules.

use super::TransportFactory;
use crate::transport::{Options, Transport};
use std::collections::HashMap;
use std::sync::Arc;

/// The exports of one module: transport name → constructor.
#[derive(Debug, Clone, Default)]
pub struct TransportModule {
    exports: HashMap<String, TransportFactory>,
}

impl TransportModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn export<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Options) -> Result<Box<dyn Transport>, crate::Error> + Send + Sync + 'static,
    {
        self.exports.insert(name.into(), TransportFactory::new(f));
        self
    }

    #[must_use]
    pub fn get(&self, export: &str) -> Option<&TransportFactory> {
        self.exports.get(export)
    }

    #[must_use]
    pub fn export_count(&self) -> usize {
        self.exports.len()
    }
}

/// Resolves a module name to its exports.
pub trait ModuleLoader: Send + Sync {
    /// # Errors
    /// [`crate::Error::ModuleNotFound`] for unknown names, [`crate::Error::ModuleLoad`] when
    /// the module's initializer fails.
    fn load(&self, module: &str) -> Result<TransportModule, crate::Error>;
}

type ModuleInit = dyn Fn() -> Result<TransportModule, crate::Error> + Send + Sync;

/// Statically registered modules. Each entry is an initializer, run on every `load`.
#[derive(Clone, Default)]
pub struct ModuleTable {
    modules: HashMap<String, Arc<ModuleInit>>,
}

impl ModuleTable {
    /// A table with no modules; every `load` reports `ModuleNotFound`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a ready-made module.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, module: TransportModule) -> Self {
        self.modules
            .insert(name.into(), Arc::new(move || Ok::<_, crate::Error>(module.clone())));
        self
    }

    /// Registers a module whose initialization may fail.
    #[must_use]
    pub fn with_init<F>(mut self, name: impl Into<String>, init: F) -> Self
    where
        F: Fn() -> Result<TransportModule, crate::Error> + Send + Sync + 'static,
    {
        self.modules.insert(name.into(), Arc::new(init));
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }
}

impl std::fmt::Debug for ModuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.modules.keys().collect();
        names.sort_unstable();
        f.debug_struct("ModuleTable").field("modules", &names).finish()
    }
}

impl ModuleLoader for ModuleTable {
    fn load(&self, module: &str) -> Result<TransportModule, crate::Error> {
        let init = self
            .modules
            .get(module)
            .ok_or_else(|| crate::Error::ModuleNotFound(module.to_string()))?;
        init()
    }
}
