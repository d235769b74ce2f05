use chrono::{Local, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use logsetup::fmt::{FieldStyles, FormatTemplate, FormatValues, Formatter, LevelStyles};
use logsetup::{DEFAULT_FORMAT, LogRecord, normalize_str};
use std::hint::black_box;

fn sample_record() -> LogRecord {
    LogRecord {
        rank: 35,
        level_name: "SUCCESS".to_string(),
        caller: "main".to_string(),
        target: "app".to_string(),
        message: "Logging setup completed".to_string(),
        timestamp: Local.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap(),
    }
}

fn bench_format_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse(DEFAULT_FORMAT);
    let values = FormatValues::new()
        .timestamp("2025-01-15 14:30:00,000")
        .level("INFO")
        .caller("main")
        .msg("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formatter");
    let formatter = Formatter::default();
    let record = sample_record();
    let fields = FieldStyles::default();
    let levels = LevelStyles::default();

    group.bench_function("plain", |b| {
        b.iter(|| formatter.format(black_box(&record)));
    });
    group.bench_function("colored", |b| {
        b.iter(|| formatter.format_colored(black_box(&record), &fields, &levels));
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_str");
    group.bench_function("numeric", |b| b.iter(|| normalize_str(black_box("17"))));
    group.bench_function("name", |b| b.iter(|| normalize_str(black_box("Critical"))));
    group.finish();
}

criterion_group!(
    benches,
    bench_format_template_render,
    bench_formatter,
    bench_normalize,
);
criterion_main!(benches);
