//! Turns the `default` profile into a ready logger.
//!
//! Best-effort: a declaration that can't be resolved or registered is logged through
//! [`internal`](crate::internal), recorded in the [`AssemblyReport`] and skipped. Assembly
//! itself never fails; in the worst case the logger has no transports and writes are no-ops.
//! A panicking module initializer or constructor counts as a failure of that declaration.

mod report;

pub use report::{AssemblyReport, AttachFailure, DeclarationReport, FailureKind, Outcome, Resolution};

use crate::config::{ConfigProvider, DEFAULT_PROFILE, LoggerDeclaration, Settings};
use crate::internal;
use crate::logger::{Engine, Logger};
use crate::registry::{ModuleLoader, ModuleTable, TransportFactory, TransportRegistry};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub struct Assembler {
    provider: Box<dyn ConfigProvider>,
    registry: TransportRegistry,
    modules: Box<dyn ModuleLoader>,
}

impl Assembler {
    /// Built-in registry, no external modules.
    #[must_use]
    pub fn new(provider: impl ConfigProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            registry: TransportRegistry::builtin(),
            modules: Box::new(ModuleTable::new()),
        }
    }

    /// Replaces the built-in registry.
    #[must_use]
    pub fn registry(mut self, registry: TransportRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Loader consulted for declarations with a `module`.
    #[must_use]
    pub fn modules(mut self, loader: impl ModuleLoader + 'static) -> Self {
        self.modules = Box::new(loader);
        self
    }

    #[must_use]
    pub fn assemble(&self) -> Logger {
        self.assemble_with_report().0
    }

    #[must_use]
    pub fn assemble_with_report(&self) -> (Logger, AssemblyReport) {
        let settings = self.settings();
        self.assemble_settings(&settings)
    }

    /// Reads the `default` profile. A provider failure is reported and replaced by the
    /// defaults, which attach the console fallback.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.provider.get(DEFAULT_PROFILE).unwrap_or_else(|e| {
            internal::warn(
                "ASSEMBLE",
                &format!("Failed to read profile '{DEFAULT_PROFILE}', using defaults: {e}"),
            );
            Settings::default()
        })
    }

    /// Builds a logger from already-fetched settings.
    #[must_use]
    pub fn assemble_settings(&self, settings: &Settings) -> (Logger, AssemblyReport) {
        let mut builder = Logger::builder().level(settings.general.parse_level());
        if let Some(app) = &settings.general.app_name {
            builder = builder.app_name(app);
        }
        let mut logger = builder.build();

        let report = self.attach_all(&mut logger, &settings.declarations());
        internal::debug(
            "ASSEMBLE",
            &format!(
                "Logger ready: {} attached, {} disabled, {} failed",
                report.attached_count(),
                report.disabled_count(),
                report.failures().count()
            ),
        );
        (logger, report)
    }

    /// Attaches every enabled declaration to `engine`, in order. Failures are contained per
    /// declaration.
    pub fn attach_all<E: Engine>(
        &self,
        engine: &mut E,
        declarations: &[LoggerDeclaration],
    ) -> AssemblyReport {
        let mut report = AssemblyReport::default();
        for declaration in declarations {
            let outcome = self.attach(engine, declaration);
            report.push(&declaration.name, declaration.module.as_deref(), outcome);
        }
        report
    }

    fn attach<E: Engine>(&self, engine: &mut E, declaration: &LoggerDeclaration) -> Outcome {
        let name = &declaration.name;
        if !declaration.enabled {
            internal::trace("ASSEMBLE", &format!("{name}: disabled, skipping"));
            return Outcome::Disabled;
        }

        let resolved = contain(|| self.resolve(declaration));
        let (resolution, factory) = match resolved {
            Ok(resolved) => resolved,
            Err(error) => {
                internal::warn("ASSEMBLE", &format!("{name}: cannot resolve transport: {error}"));
                return Outcome::Failed(AttachFailure {
                    kind: FailureKind::Resolution,
                    error,
                });
            }
        };

        match contain(|| engine.add(&factory, &declaration.options)) {
            Ok(()) => {
                internal::debug("ASSEMBLE", &format!("{name}: attached ({resolution})"));
                Outcome::Attached(resolution)
            }
            Err(error) => {
                internal::warn(
                    "ASSEMBLE",
                    &format!(
                        "{name}: rejected options {}: {error}",
                        declaration.options
                    ),
                );
                Outcome::Failed(AttachFailure {
                    kind: FailureKind::Registration,
                    error,
                })
            }
        }
    }

    /// `module` set: that module's export named after the declaration. Otherwise the
    /// built-in registry entry of the same name.
    fn resolve(
        &self,
        declaration: &LoggerDeclaration,
    ) -> Result<(Resolution, TransportFactory), crate::Error> {
        let name = &declaration.name;
        if let Some(module) = &declaration.module {
            let exports = self.modules.load(module)?;
            let factory = exports
                .get(name)
                .cloned()
                .ok_or_else(|| crate::Error::MissingExport {
                    module: module.clone(),
                    export: name.clone(),
                })?;
            return Ok((Resolution::Plugin(module.clone()), factory));
        }

        self.registry
            .lookup(name)
            .cloned()
            .map(|factory| (Resolution::Builtin, factory))
            .ok_or_else(|| crate::Error::UnknownTransport(name.clone()))
    }
}

/// Runs third-party code, turning a panic into [`crate::Error::Panicked`].
fn contain<T>(f: impl FnOnce() -> Result<T, crate::Error>) -> Result<T, crate::Error> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(crate::Error::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

impl std::fmt::Debug for Assembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assembler")
            .field("registry", &self.registry.names())
            .finish_non_exhaustive()
    }
}
