//! Criterion micro-benchmarks for decimal parsing and printing.

use std::hint::black_box;

use blockint_test_utils::fixtures;
use blockint_uint::BigUint;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_decimal");
    for digits in [8usize, 40, 200] {
        let s = "9".repeat(digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &s, |b, s| {
            b.iter(|| BigUint::from_decimal(black_box(s)));
        });
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_decimal_string");
    for n in [20u64, 40, 80] {
        let v = fixtures::factorial(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &v, |b, v| {
            b.iter(|| black_box(v).to_decimal_string());
        });
    }
    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let v = fixtures::factorial(100);
    c.bench_function("to_binary_string_100!", |b| {
        b.iter(|| black_box(&v).to_binary_string());
    });
}

fn bench_hash(c: &mut Criterion) {
    let v = fixtures::all_ones(16);
    c.bench_function("murmur_hash_16_blocks", |b| {
        b.iter(|| black_box(&v).murmur_hash());
    });
}

criterion_group!(benches, bench_parse, bench_print, bench_binary, bench_hash);
criterion_main!(benches);
