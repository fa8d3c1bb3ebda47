//! Benchmarks for error creation and classification hot paths.
//!
//! Construction pays for one stack capture; wrapping an augmented
//! error must not pay for another. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;
use stackerr::{err, StackError, Value};
use std::io;

#[inline(never)]
fn io_err(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, msg)
}

fn bench_baseline_io_error(c: &mut Criterion) {
    c.bench_function("baseline_io_error", |b| {
        b.iter(|| black_box(io_err("fail")))
    });
}

fn bench_new_with_args(c: &mut Criterion) {
    c.bench_function("new_with_args", |b| {
        b.iter(|| black_box(err!("open %s failed after %d tries", "state.db", 3)))
    });
}

fn bench_wrap_plain(c: &mut Criterion) {
    c.bench_function("wrap_plain", |b| {
        b.iter(|| black_box(StackError::wrap(io_err("fail"))))
    });
}

fn bench_wrap_layer(c: &mut Criterion) {
    let base = err!("inner %v", "x");
    c.bench_function("wrap_layer", |b| {
        b.iter(|| black_box(base.with_template("outer %v", vec![Value::from("y")])))
    });
}

fn bench_classify_exact(c: &mut Criterion) {
    let e = err!("inner %v", "x").with_template("outer %v", vec![Value::from("y")]);
    c.bench_function("contains_exact", |b| {
        b.iter(|| black_box(e.contains("inner %v")))
    });
}

fn bench_classify_pattern(c: &mut Criterion) {
    let e = err!("inner %v", "x").with_template("outer %v", vec![Value::from("y")]);
    let pattern = Regex::new("^inner").unwrap();
    c.bench_function("contains_pattern", |b| {
        b.iter(|| black_box(e.contains_pattern(&pattern)))
    });
}

criterion_group!(
    benches,
    bench_baseline_io_error,
    bench_new_with_args,
    bench_wrap_plain,
    bench_wrap_layer,
    bench_classify_exact,
    bench_classify_pattern,
);
criterion_main!(benches);
