//! Criterion benchmarks for confidence ranking.
//!
//! Measures ranking time for batches of 1k, 10k, and 50k generated places to
//! confirm the pass stays dominated by the final sort.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package placerank-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use placerank_core::PlaceRecord;
use placerank_scorer::{RankOptions, rank};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Batch sizes to benchmark.
const BATCH_SIZES: &[usize] = &[1_000, 10_000, 50_000];

/// Fixed seed so every run ranks the same places.
const BENCHMARK_SEED: u64 = 0x5EED_CAFE;

/// Generate places with a realistic mix of ratings and review counts.
///
/// Roughly one in ten places has no reviews; review counts follow a long
/// tail so most places have a few dozen and some have thousands.
fn generate_places(count: usize, seed: u64) -> Vec<PlaceRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            if rng.gen_bool(0.1) {
                return PlaceRecord::new(format!("place-{index}"), None, 0);
            }
            let rating = f64::from(rng.gen_range(10_u32..=50_u32)) / 10.0;
            let magnitude = rng.gen_range(0_u32..4_u32);
            let reviews = rng.gen_range(1_i64..=10_i64.pow(magnitude + 1));
            PlaceRecord::new(format!("place-{index}"), Some(rating), reviews)
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let options = RankOptions::default();

    for &size in BATCH_SIZES {
        let places = generate_places(size, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &places, |b, places| {
            b.iter(|| rank(places, &options).expect("generated places are valid"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
