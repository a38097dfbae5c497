use corelog::config::extract_sources;
use corelog::{ConfigProvider, Error, FileProvider, Level, LoggerDeclaration, Settings};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_document_gets_console_fallback() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings.loggers, vec![LoggerDeclaration::console_fallback()]);
    assert_eq!(settings.general.parse_level(), Level::Info);
    assert_eq!(settings.general.parse_internal_level(), Level::Warn);
}

#[test]
fn declarations_parse_with_absent_fields() {
    let settings = Settings::from_toml_str(
        r#"
[[loggers]]
name = "Console"

[[loggers]]
name = "Syslog"
module = "corelog-syslog"
enabled = true

[loggers.options]
host = "localhost"
port = 514
"#,
    )
    .unwrap();

    assert_eq!(settings.loggers.len(), 2);

    let console = &settings.loggers[0];
    assert!(!console.enabled);
    assert!(console.module.is_none());
    assert!(console.options.is_empty());

    let syslog = &settings.loggers[1];
    assert!(syslog.enabled);
    assert_eq!(syslog.module.as_deref(), Some("corelog-syslog"));
    assert_eq!(syslog.options.str("host").unwrap(), Some("localhost"));
    assert_eq!(syslog.options.get("port"), Some(&serde_json::json!(514)));
}

#[test]
fn general_section_parses() {
    let settings = Settings::from_toml_str(
        r#"
[general]
level = "WARNING"
app_name = "billing"
internal_level = "debug"
"#,
    )
    .unwrap();
    assert_eq!(settings.general.parse_level(), Level::Warn);
    assert_eq!(settings.general.app_name.as_deref(), Some("billing"));
    assert_eq!(settings.general.parse_internal_level(), Level::Debug);
}

#[test]
fn unparseable_level_falls_back_to_info() {
    let settings = Settings::from_toml_str("[general]\nlevel = \"chatty\"").unwrap();
    assert_eq!(settings.general.parse_level(), Level::Info);
}

#[test]
fn non_boolean_enabled_is_a_parse_error() {
    let err = Settings::from_toml_str("[[loggers]]\nname = \"Console\"\nenabled = \"yes\"")
        .unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn extract_sources_strips_include_lines() {
    let (sources, rest) = extract_sources(
        "source = \"~/a.toml\"\nsource='b.toml'\n[general]\nlevel = \"info\"\n",
    );
    assert_eq!(sources, vec!["~/a.toml", "b.toml"]);
    assert_eq!(rest, "[general]\nlevel = \"info\"\n");
}

#[test]
fn includes_append_declarations_without_overriding() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("default.toml");
    let child = tmp.path().join("transports.toml");

    fs::write(
        &base,
        format!(
            r#"
source = "{}"

[[loggers]]
name = "Console"
enabled = true
"#,
            child.display()
        ),
    )
    .unwrap();
    fs::write(
        &child,
        r#"
[[loggers]]
name = "Console"
enabled = false

[[loggers]]
name = "Json"
enabled = true
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&base).unwrap();
    let names: Vec<_> = settings.loggers.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Console", "Json"]);
    assert!(settings.loggers[0].enabled);
}

#[test]
fn missing_include_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("default.toml");
    fs::write(
        &base,
        format!(
            "source = \"{}\"\n[[loggers]]\nname = \"Json\"\nenabled = true\n",
            tmp.path().join("missing.toml").display()
        ),
    )
    .unwrap();

    let settings = Settings::load_from(&base).unwrap();
    assert_eq!(settings.loggers.len(), 1);
    assert_eq!(settings.loggers[0].name, "Json");
}

#[test]
fn cyclic_includes_error() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a.toml");
    let b = tmp.path().join("b.toml");
    fs::write(&a, format!("source = \"{}\"", b.display())).unwrap();
    fs::write(&b, format!("source = \"{}\"", a.display())).unwrap();

    let err = Settings::load_from(&a).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn diamond_includes_are_not_cycles() {
    let tmp = TempDir::new().unwrap();
    let [a, b, c, d] = ["a", "b", "c", "d"].map(|n| tmp.path().join(format!("{n}.toml")));
    fs::write(
        &a,
        format!(
            "source = \"{}\"\nsource = \"{}\"\n[[loggers]]\nname = \"Console\"\nenabled = true\n",
            b.display(),
            c.display()
        ),
    )
    .unwrap();
    fs::write(&b, format!("source = \"{}\"", d.display())).unwrap();
    fs::write(&c, format!("source = \"{}\"", d.display())).unwrap();
    fs::write(&d, "[[loggers]]\nname = \"Json\"\nenabled = true\n").unwrap();

    let settings = Settings::load_from(&a).unwrap();
    let names: Vec<_> = settings.loggers.iter().map(|decl| decl.name.as_str()).collect();
    assert_eq!(names, vec!["Console", "Json"]);
}

#[test]
fn included_duplicate_names_are_all_kept() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("default.toml");
    let child = tmp.path().join("files.toml");
    fs::write(&base, format!("source = \"{}\"", child.display())).unwrap();
    fs::write(
        &child,
        r#"
[[loggers]]
name = "File"
enabled = true
options = { filename = "a.log" }

[[loggers]]
name = "File"
enabled = true
options = { filename = "b.log" }
"#,
    )
    .unwrap();

    let direct = Settings::load_from(&child).unwrap();
    let included = Settings::load_from(&base).unwrap();
    assert_eq!(direct.loggers.len(), 2);
    assert_eq!(included.loggers, direct.loggers);
    assert_eq!(included.loggers[1].options.str("filename").unwrap(), Some("b.log"));
}

#[test]
fn include_only_files_still_get_the_fallback() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("default.toml");
    let child = tmp.path().join("general.toml");
    fs::write(&base, format!("source = \"{}\"", child.display())).unwrap();
    fs::write(&child, "[general]\nlevel = \"debug\"").unwrap();

    let settings = Settings::load_from(&base).unwrap();
    assert_eq!(settings.loggers, vec![LoggerDeclaration::console_fallback()]);
    assert_eq!(settings.general.parse_level(), Level::Info);
}

#[test]
fn file_provider_reads_profile_by_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("default.toml"),
        "[[loggers]]\nname = \"Json\"\nenabled = true\n",
    )
    .unwrap();

    let provider = FileProvider::new(tmp.path());
    assert_eq!(provider.path_for("default"), tmp.path().join("default.toml"));

    let settings = provider.get("default").unwrap();
    assert_eq!(settings.loggers[0].name, "Json");
}

#[test]
fn file_provider_missing_profile_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = FileProvider::new(tmp.path()).get("default").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_provider_reports_syntax_errors() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("default.toml"), "[[loggers]\nname=").unwrap();

    let err = FileProvider::new(tmp.path()).get("default").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}
