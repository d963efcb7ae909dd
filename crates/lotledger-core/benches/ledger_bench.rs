//! Ledger performance benchmarks.
//!
//! Run with: cargo bench -p lotledger-core

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lotledger_core::{FixedClock, Ledger};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Generate a ledger with N batches, alternating between two products.
fn generate_ledger(num_batches: usize) -> Ledger<FixedClock> {
    let mut ledger = Ledger::with_clock(FixedClock::epoch());

    for i in 0..num_batches {
        let product = if i % 2 == 0 { "Widget" } else { "Gadget" };
        let buy = dec!(100.00) + Decimal::from(i as u32);
        ledger
            .add_batch(product, 10, buy, buy + dec!(50.00))
            .expect("valid batch");
    }

    ledger
}

fn bench_add_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_batch");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(generate_ledger(size)));
        });
    }

    group.finish();
}

fn bench_sell_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("sell_fifo");

    for size in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_ledger(size),
                |mut ledger| {
                    // Drain half the Widget batches, 10 units at a time
                    for _ in 0..size / 4 {
                        let _ = ledger.sell("Widget", 10);
                    }
                    black_box(ledger)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_sell_interleaved(c: &mut Criterion) {
    let mut group = c.benchmark_group("sell_interleaved");

    // Worst case for the rebuild pass: every other batch must be set aside.
    for size in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_ledger(size),
                |mut ledger| {
                    let _ = ledger.sell("Gadget", 5);
                    black_box(ledger)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_inventory_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_status");

    for size in [10, 100, 1000] {
        let ledger = generate_ledger(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.inventory_status()));
        });
    }

    group.finish();
}

fn bench_sales_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales_summary");

    for size in [10, 100, 1000] {
        let mut ledger = generate_ledger(size);
        for _ in 0..size / 2 {
            let _ = ledger.sell("Widget", 3);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.sales_summary()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_batch,
    bench_sell_fifo,
    bench_sell_interleaved,
    bench_inventory_status,
    bench_sales_summary,
);
criterion_main!(benches);
