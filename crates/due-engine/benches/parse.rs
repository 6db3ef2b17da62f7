use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use due_engine::{parse, parse_with_options, tokenize, ParseOptions};

fn bench_parse(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 10, 14, 10, 0, 0).unwrap();
    let inputs = ["9pm", "mon 2h30m", "friday 12:30pm 1w2d", "2d4h", "someday"];

    let mut group = c.benchmark_group("parse");
    for input in inputs {
        group.bench_function(input, |b| b.iter(|| parse(black_box(Some(input)), black_box(now))));
    }
    group.finish();

    let berlin = ParseOptions::with_timezone_name("Europe/Berlin").unwrap();
    c.bench_function("parse_with_timezone", |b| {
        b.iter(|| parse_with_options(black_box(Some("thu 9am 30m")), black_box(now), &berlin))
    });

    c.bench_function("tokenize_long_duration", |b| {
        b.iter(|| tokenize(black_box("1w2d3h4m1w2d3h4m1w2d3h4m")))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
