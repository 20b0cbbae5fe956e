//! Tree generation benchmarks.
//!
//! Measures end-to-end generation for each attachment strategy. Power-law
//! and closest-point attachment scan the prefix for every node, so their
//! cost grows quadratically with the node count.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use sapling_benches::params::{BenchStrategy, TreeBenchParams};
use sapling_core::TreeError;

/// Seed used for every generated tree.
const SEED: u64 = 42;

/// Tree sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 1_000, 5_000];

/// Edge weight maximum applied to every run.
const EDGE_WEIGHT_MAX: u32 = 100;

fn generate_trees_impl(c: &mut Criterion) -> Result<(), TreeError> {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for strategy in BenchStrategy::ALL {
        for &node_count in NODE_COUNTS {
            let params = TreeBenchParams {
                node_count,
                strategy,
                edge_weight_max: Some(EDGE_WEIGHT_MAX),
            };
            let generator = params.builder(SEED).build()?;

            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &generator,
                |b, generator| {
                    b.iter(|| generator.generate());
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn generate_trees(c: &mut Criterion) {
    if let Err(err) = generate_trees_impl(c) {
        panic!("generate benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generate_trees);
criterion_main!(benches);
