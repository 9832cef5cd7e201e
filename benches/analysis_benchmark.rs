/// Benchmark module for the aggregation and rendering pipeline.
/// Measures monthly bucketing, project ranking, categorization and chart rendering
/// over a synthetic transaction history.
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xpdash::analysis::{aggregate_by_month, categorize, rank_by_project};
use xpdash::plotting::{monthly_bar_chart, ranked_bar_chart};
use xpdash::Transaction;

const PATHS: [&str; 5] = [
    "/bahrain/bh-piscine/quest-",
    "/bahrain/bh-module/piscine-js/quest-",
    "/bahrain/bh-module/project-",
    "/bahrain/bh-module/checkpoint/exercise-",
    "/bahrain/onboarding/step-",
];

/// Generate `count` transactions spread over roughly three years, in random order.
///
/// # Arguments
/// * `count` - Number of transactions
fn synthetic_transactions(count: usize) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(42);
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

    (0..count)
        .map(|_| {
            let offset = Duration::minutes(rng.gen_range(0..3 * 365 * 24 * 60));
            let prefix = PATHS[rng.gen_range(0..PATHS.len())];
            let project = rng.gen_range(0..60);
            Transaction::new(
                rng.gen_range(0..25_000),
                start + offset,
                format!("{prefix}{project}"),
                Some(format!("project-{project}")),
            )
        })
        .collect()
}

/// Benchmark the aggregators at several input sizes
fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    for size in [100, 1_000, 10_000] {
        let transactions = synthetic_transactions(size);
        group.bench_with_input(BenchmarkId::new("by_month", size), &transactions, |b, txs| {
            b.iter(|| aggregate_by_month(black_box(txs)))
        });
        group.bench_with_input(BenchmarkId::new("by_project", size), &transactions, |b, txs| {
            b.iter(|| rank_by_project(black_box(txs)))
        });
        group.bench_with_input(BenchmarkId::new("categorize", size), &transactions, |b, txs| {
            b.iter(|| categorize(black_box(txs)))
        });
    }
    group.finish();
}

/// Benchmark SVG rendering of the aggregated series
fn bench_rendering(c: &mut Criterion) {
    let transactions = synthetic_transactions(5_000);
    let months = aggregate_by_month(&transactions);
    let projects = rank_by_project(&transactions);

    let mut group = c.benchmark_group("rendering");
    group.bench_function("monthly_bar_chart", |b| {
        b.iter(|| monthly_bar_chart(black_box(&months)))
    });
    group.bench_function("ranked_bar_chart", |b| {
        b.iter(|| ranked_bar_chart(black_box(&projects)))
    });
    group.finish();
}

criterion_group!(benches, bench_aggregation, bench_rendering);
criterion_main!(benches);
