//! Criterion micro-benchmarks for BigUint arithmetic across operand widths.

use std::hint::black_box;

use blockint_bench::{random_operands, SIZES};
use blockint_uint::BigUint;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for blocks in SIZES {
        let ops = random_operands(1, 2, blocks);
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &ops, |b, ops| {
            b.iter(|| black_box(&ops[0]) + black_box(&ops[1]));
        });
    }
    group.finish();
}

fn bench_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub");
    for blocks in SIZES {
        let ops = random_operands(2, 2, blocks);
        let (big, small) = if ops[0] >= ops[1] {
            (&ops[0], &ops[1])
        } else {
            (&ops[1], &ops[0])
        };
        group.bench_function(BenchmarkId::from_parameter(blocks), |b| {
            b.iter(|| black_box(big).checked_sub(black_box(small)));
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for blocks in SIZES {
        let ops = random_operands(3, 2, blocks);
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &ops, |b, ops| {
            b.iter(|| black_box(&ops[0]) * black_box(&ops[1]));
        });
    }
    group.finish();
}

fn bench_div_mod(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_mod");
    for blocks in SIZES {
        let dividends = random_operands(4, 1, blocks * 2);
        let divisors = random_operands(5, 1, blocks);
        let (dividend, divisor) = (&dividends[0], &divisors[0]);
        group.bench_function(BenchmarkId::from_parameter(blocks), |b| {
            b.iter(|| black_box(dividend).div_mod(black_box(divisor)));
        });
    }
    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let ops = random_operands(6, 1, 16);
    let v = &ops[0];
    c.bench_function("shl_100", |b| b.iter(|| black_box(v) << black_box(100u64)));
    c.bench_function("shr_100", |b| b.iter(|| black_box(v) >> black_box(100u64)));
}

fn bench_cmp(c: &mut Criterion) {
    let a = BigUint::from_blocks(&[7; 32]);
    let mut b_val = a.clone();
    b_val.increment();
    c.bench_function("cmp_32_blocks_low_diff", |b| {
        b.iter(|| black_box(&a).cmp(black_box(&b_val)));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_sub,
    bench_mul,
    bench_div_mod,
    bench_shift,
    bench_cmp
);
criterion_main!(benches);
