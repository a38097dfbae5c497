//! `corelog` - assemble a process-wide logger from declarative transport configuration.
//!
//! Settings list named transports (`[[loggers]]`). Each enabled declaration is resolved to a
//! constructor, either from the built-in registry (`Console`, `File`, `Json`) or from an
//! external module registered up front, and attached to one shared [`Logger`]. Resolution and
//! registration failures are contained per declaration: startup never fails because of a
//! misconfigured transport.
//!
//! # Example
//!
//! ```
//! use corelog::{Assembler, LoggerDeclaration, Options, Settings, StaticProvider};
//!
//! let settings = Settings {
//!     loggers: vec![
//!         LoggerDeclaration::new("Console")
//!             .enabled(true)
//!             .options(Options::new().with("colors", false)),
//!         LoggerDeclaration::new("Syslog").module("corelog-syslog").enabled(true),
//!     ],
//!     ..Settings::default()
//! };
//!
//! let assembler = Assembler::new(StaticProvider::new().with("default", settings));
//! let (logger, report) = assembler.assemble_with_report();
//!
//! // No module named "corelog-syslog" is registered, so only Console is attached.
//! assert_eq!(logger.transport_count(), 1);
//! assert_eq!(report.failures().count(), 1);
//!
//! logger.info("MAIN", "Application started");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `corelog` binary

pub mod assemble;
pub mod config;
pub mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
pub mod registry;
pub mod transport;

pub use assemble::{AssemblyReport, Assembler, FailureKind, Outcome, Resolution};
pub use config::{
    ConfigProvider, DEFAULT_PROFILE, FileProvider, GeneralSettings, LoggerDeclaration, Settings,
    StaticProvider,
};
pub use error::Error;
pub use level::Level;
pub use logger::{Engine, Logger, LoggerBuilder};
pub use registry::{ModuleLoader, ModuleTable, TransportFactory, TransportModule, TransportRegistry};
pub use transport::{
    ConsoleTransport, FileTransport, JsonTransport, LogRecord, Options, Transport,
};
