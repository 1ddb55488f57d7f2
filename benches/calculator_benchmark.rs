// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - plain, fractional, and exponent literals
// 2. Evaluation - each operation on pre-parsed operands
// 3. Formatting - short and repeating results
// 4. Full pipeline - text in, formatted text out
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_calculator::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_operand");

    for literal in ["42", "-12345.6789", "6.02214076e23", "0.1234567890123456789012345678"] {
        group.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, literal| {
            b.iter(|| black_box(parse_operand(Some(black_box(literal)))));
        });
    }

    group.finish();
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let ctx = DecimalContext::default();
    let a = Decimal::new(1_234_567_891, 4);
    let b = Decimal::new(-98_765, 3);

    for op in Operation::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(op), &op, |bench, op| {
            bench.iter(|| black_box(evaluate(black_box(a), black_box(b), *op, &ctx)));
        });
    }

    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_result");
    let ctx = DecimalContext::default();

    let short = Decimal::new(25, 1);
    let repeating = Decimal::ONE / Decimal::from(3);

    group.bench_function("short", |b| {
        b.iter(|| black_box(format_result(black_box(short), &ctx)));
    });
    group.bench_function("repeating", |b| {
        b.iter(|| black_box(format_result(black_box(repeating), &ctx)));
    });

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let calculator = Calculator::default();

    c.bench_function("calculate_divide", |b| {
        b.iter(|| {
            black_box(calculator.calculate(
                Some(black_box("22")),
                Some(black_box("7")),
                black_box("divide"),
            ))
        });
    });

    c.bench_function("calculate_rejected", |b| {
        b.iter(|| {
            black_box(calculator.calculate(
                Some(black_box("abc")),
                Some(black_box("7")),
                black_box("add"),
            ))
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_evaluate,
    benchmark_format,
    benchmark_pipeline
);
criterion_main!(benches);
