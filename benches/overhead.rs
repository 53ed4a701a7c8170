//! Registry hot-path overhead benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use ptime::{parse_time, TimerName, Timers};
use std::hint::black_box;

fn bench_set_delete(c: &mut Criterion) {
    let timers = Timers::new();
    let name = TimerName::from("bench");
    c.bench_function("set_time + delete_time", |b| {
        b.iter(|| {
            timers.set_time("bench").unwrap();
            black_box(timers.delete_time(&name).unwrap());
        })
    });
}

fn bench_diff_time(c: &mut Criterion) {
    let timers = Timers::new();
    let name = TimerName::from("bench");
    timers.set_time("bench").unwrap();
    c.bench_function("diff_time", |b| {
        b.iter(|| black_box(timers.diff_time(&name).unwrap()))
    });
}

fn bench_parse_time(c: &mut Criterion) {
    c.bench_function("parse_time", |b| {
        b.iter(|| black_box(parse_time(black_box(1_500_000_000))))
    });
}

criterion_group!(benches, bench_set_delete, bench_diff_time, bench_parse_time);
criterion_main!(benches);
