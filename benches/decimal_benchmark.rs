// ============================================================================
// Decimal Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Decimal strings into atomic-unit magnitudes
// 2. Formatting - Magnitudes back into canonical strings
// 3. Arithmetic - Add and scalar division under each rounding mode
// 4. Aggregates - Folding a column of operand strings
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crypto_decimal::prelude::*;
use std::hint::black_box;

fn denom(family: CurrencyFamily, symbol: &str) -> &'static Denomination {
    resolve_denomination(family, symbol).expect("denomination in registry")
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let inputs = [
        ("BTC", CurrencyFamily::Bitcoin, "BTC", "1.23456789"),
        ("SAT", CurrencyFamily::Bitcoin, "SAT", "123456789"),
        ("ETH", CurrencyFamily::Ethereum, "ETH", "1234567.123456789012345678"),
        ("ETH_truncated", CurrencyFamily::Ethereum, "ETH", "1.1234567890123456789012345678901234567890"),
    ];

    for (label, family, symbol, text) in inputs {
        let d = denom(family, symbol);
        group.bench_with_input(BenchmarkId::new("parse", label), &text, |b, text| {
            b.iter(|| black_box(parse(black_box(text), d)))
        });
    }

    group.bench_function("is_valid_decimal", |b| {
        b.iter(|| black_box(is_valid_decimal(black_box("  -1234567.12345678  "))))
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let eth = denom(CurrencyFamily::Ethereum, "ETH");
    let gwei = denom(CurrencyFamily::Ethereum, "GWEI");
    let wei = denom(CurrencyFamily::Ethereum, "WEI");
    let value = parse("98765.432109876543210987", eth).expect("valid amount");

    for d in [eth, gwei, wei] {
        group.bench_with_input(BenchmarkId::new("format", d.symbol), &value, |b, value| {
            b.iter(|| black_box(format(black_box(value), d)))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let btc = denom(CurrencyFamily::Bitcoin, "BTC");
    let a = parse("20999999.99999999", btc).expect("valid amount");
    let b = parse("0.00000001", btc).expect("valid amount");

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(add(black_box(&a), black_box(&b))))
    });

    group.bench_function("multiply_by_scalar", |bench| {
        let scalar = Scalar::new(15, 1);
        bench.iter(|| black_box(multiply_by_scalar(black_box(&a), &scalar)))
    });

    let divisor = Scalar::new(7, 0);
    for mode in RoundingMode::ALL {
        group.bench_with_input(
            BenchmarkId::new("divide_by_scalar", mode),
            &mode,
            |bench, mode| bench.iter(|| black_box(divide_by_scalar(black_box(&a), &divisor, *mode))),
        );
    }

    group.finish();
}

// ============================================================================
// Aggregate Benchmarks
// ============================================================================

fn benchmark_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");

    for rows in [100usize, 1000, 10000].iter() {
        let column: Vec<String> = (0..*rows)
            .map(|i| format!("{}.{:09}", i, (i * 7919) % 1_000_000_000))
            .collect();

        for kind in AggregateKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.function_name(), rows), &column, |b, column| {
                b.iter(|| {
                    let mut aggregate =
                        Aggregate::new(kind, "SOL", "SOL", "LAMP", &EngineConfig::new())
                            .expect("known symbols");
                    for row in column {
                        aggregate.step(Some(row)).expect("valid row");
                    }
                    black_box(aggregate.finish())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_arithmetic,
    benchmark_aggregates,
);

criterion_main!(benches);
