//! Synthetic raw scores for normaliser benchmarks.

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng};

/// Largest raw score produced by [`synthetic_scores`].
pub const SCORE_CEILING: f64 = 1_500.0;

/// Returns `count` reproducible scores in `[0, SCORE_CEILING)`.
///
/// # Examples
/// ```
/// use sapling_benches::scores::{SCORE_CEILING, synthetic_scores};
///
/// let scores = synthetic_scores(4, 9);
/// assert_eq!(scores.len(), 4);
/// assert!(scores.iter().all(|score| (0.0..SCORE_CEILING).contains(score)));
/// assert_eq!(scores, synthetic_scores(4, 9));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Scales unit draws onto the score range"
)]
pub fn synthetic_scores(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let unit: f64 = rng.sample(Standard);
            unit * SCORE_CEILING
        })
        .collect()
}
