use corelog::{FileTransport, JsonTransport, Level, LogRecord, Transport};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;

fn make_record() -> LogRecord {
    LogRecord::new(Level::Info, "BENCH", "benchmark log message")
        .app_name(Some("bench-app".to_string()))
}

fn bench_file_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let transport = FileTransport::new(tmp.path().join("bench.log").to_string_lossy());
    let record = make_record();

    c.bench_function("FileTransport::write", |b| {
        b.iter(|| transport.write(black_box(&record)).expect("write failed"));
    });
}

fn bench_json_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let transport = JsonTransport::new().path(tmp.path().join("bench.jsonl"));
    let record = make_record();

    c.bench_function("JsonTransport::write", |b| {
        b.iter(|| transport.write(black_box(&record)).expect("write failed"));
    });
}

criterion_group!(benches, bench_file_write, bench_json_write);
criterion_main!(benches);
