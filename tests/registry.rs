use corelog::{
    Error, LogRecord, ModuleLoader, ModuleTable, Options, Transport, TransportModule,
    TransportRegistry,
};

struct Null;

impl Transport for Null {
    fn name(&self) -> &str {
        "Null"
    }

    fn write(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[test]
fn builtin_registry_has_the_three_transports() {
    let registry = TransportRegistry::builtin();
    assert_eq!(registry.names(), vec!["Console", "File", "Json"]);
    assert!(registry.lookup("console").is_none());
}

#[test]
fn builtin_console_constructs_with_empty_options() {
    let registry = TransportRegistry::builtin();
    let console = registry
        .lookup("Console")
        .unwrap()
        .construct(&Options::new())
        .unwrap();
    assert_eq!(console.name(), "Console");
}

#[test]
fn builtin_file_propagates_validation_errors() {
    let registry = TransportRegistry::builtin();
    let result = registry.lookup("File").unwrap().construct(&Options::new());
    assert!(matches!(result, Err(Error::MissingOption(_))));
}

#[test]
fn registration_replaces_existing_entry() {
    let registry = TransportRegistry::builtin().with("Console", |_| Ok(Box::new(Null)));
    let transport = registry
        .lookup("Console")
        .unwrap()
        .construct(&Options::new())
        .unwrap();
    assert_eq!(transport.name(), "Null");
}

#[test]
fn module_table_loads_registered_modules() {
    let table = ModuleTable::new().with(
        "corelog-null",
        TransportModule::new().export("Null", |_| Ok(Box::new(Null))),
    );
    assert!(table.contains("corelog-null"));

    let module = table.load("corelog-null").unwrap();
    assert_eq!(module.export_count(), 1);
    assert!(module.get("Null").is_some());
    assert!(module.get("Other").is_none());
}

#[test]
fn module_table_reports_unknown_modules() {
    let err = ModuleTable::new().load("nowhere").unwrap_err();
    assert!(matches!(err, Error::ModuleNotFound(name) if name == "nowhere"));
}

#[test]
fn module_initializer_errors_pass_through() {
    let table = ModuleTable::new().with_init("flaky", || {
        Err(Error::ModuleLoad {
            module: "flaky".to_string(),
            reason: "missing credentials".to_string(),
        })
    });
    let err = table.load("flaky").unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to load module flaky: missing credentials"
    );
}
