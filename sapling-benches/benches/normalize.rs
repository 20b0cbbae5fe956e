//! Weight normalisation benchmarks.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use std::num::NonZeroU32;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use sapling_benches::scores::synthetic_scores;
use sapling_core::WeightNormalizer;

/// Seed used for score generation.
const SEED: u64 = 7;

/// Score counts to benchmark.
const SCORE_COUNTS: &[usize] = &[1_000, 100_000];

/// Weight maximum applied to every run.
const WEIGHT_MAX: NonZeroU32 = NonZeroU32::MIN.saturating_add(99);

fn normalize_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let normalizer = WeightNormalizer::new(WEIGHT_MAX);

    for &count in SCORE_COUNTS {
        let scores = synthetic_scores(count, SEED);
        group.bench_with_input(BenchmarkId::from_parameter(count), &scores, |b, scores| {
            b.iter(|| normalizer.normalize(scores));
        });
    }

    group.finish();
}

criterion_group!(benches, normalize_scores);
criterion_main!(benches);
