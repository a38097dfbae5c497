use corelog::{Assembler, LoggerDeclaration, Options, Settings, StaticProvider};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;

fn bench_assemble(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let log = tmp.path().join("bench.log").to_string_lossy().into_owned();

    let settings = Settings {
        loggers: vec![
            LoggerDeclaration::new("Console")
                .enabled(true)
                .options(Options::new().with("colors", false)),
            LoggerDeclaration::new("File")
                .enabled(true)
                .options(Options::new().with("filename", log)),
            LoggerDeclaration::new("Json").enabled(false),
            LoggerDeclaration::new("Remote")
                .module("corelog-remote")
                .enabled(true),
        ],
        ..Settings::default()
    };
    let assembler = Assembler::new(StaticProvider::new().with("default", settings));

    c.bench_function("Assembler::assemble", |b| {
        b.iter(|| black_box(assembler.assemble()));
    });
}

fn bench_parse_settings(c: &mut Criterion) {
    let content = r#"
[general]
level = "debug"
app_name = "bench"

[[loggers]]
name = "Console"
enabled = true
options = { colors = false, level = "warn" }

[[loggers]]
name = "Json"
enabled = true
options = { path = "/tmp/corelog-bench.jsonl" }
"#;

    c.bench_function("Settings::from_toml_str", |b| {
        b.iter(|| Settings::from_toml_str(black_box(content)).expect("parse failed"));
    });
}

criterion_group!(benches, bench_assemble, bench_parse_settings);
criterion_main!(benches);
