//! Integer weight assignment for nodes and edges.
//!
//! Random weights are drawn uniformly from `1..=max`. Distances measured by
//! closest-point attachment are instead scaled linearly so the shortest edge
//! weighs 1 and the longest weighs exactly `max`.

use std::num::NonZeroU32;

use rand::Rng;

/// Draws a weight uniformly from `1..=max`.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
///
/// use rand::{SeedableRng, rngs::SmallRng};
/// use sapling_core::draw_weight;
///
/// let max = NonZeroU32::new(6).expect("non-zero");
/// let weight = draw_weight(max, &mut SmallRng::seed_from_u64(4));
/// assert!((1..=6).contains(&weight));
/// ```
pub fn draw_weight<R: Rng + ?Sized>(max: NonZeroU32, rng: &mut R) -> u32 {
    rng.gen_range(1..=max.get())
}

/// Smallest and largest value of a non-empty score collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreRange {
    min: f64,
    max: f64,
}

impl ScoreRange {
    /// Computes the range of `scores`, or `None` when `scores` is empty.
    ///
    /// # Examples
    /// ```
    /// use sapling_core::ScoreRange;
    ///
    /// let range = ScoreRange::of(&[4.0, 2.0, 10.0]).expect("non-empty");
    /// assert_eq!((range.min(), range.max()), (2.0, 10.0));
    /// assert!(ScoreRange::of(&[]).is_none());
    /// ```
    #[must_use]
    pub fn of(scores: &[f64]) -> Option<Self> {
        let (&first, rest) = scores.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |range, &score| Self {
                min: range.min.min(score),
                max: range.max.max(score),
            },
        ))
    }

    /// Smallest score.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest score.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` when every score is equal.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

/// Maps raw nonnegative scores onto `1..=max`, preserving their order.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
///
/// use sapling_core::WeightNormalizer;
///
/// let normalizer = WeightNormalizer::new(NonZeroU32::new(5).expect("non-zero"));
/// assert_eq!(normalizer.normalize(&[2.0, 4.0, 10.0]), vec![1, 2, 5]);
/// assert_eq!(normalizer.normalize(&[3.0, 3.0]), vec![1, 1]);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightNormalizer {
    max: NonZeroU32,
}

impl WeightNormalizer {
    /// Creates a normalizer targeting `1..=max`.
    #[must_use]
    pub const fn new(max: NonZeroU32) -> Self {
        Self { max }
    }

    /// Largest weight produced.
    #[must_use]
    pub const fn max(&self) -> NonZeroU32 {
        self.max
    }

    /// Scales `scores` so the minimum maps to 1 and the maximum to
    /// [`Self::max`]; intermediate scores are interpolated linearly and
    /// floored. When all scores are equal every weight is 1.
    #[must_use]
    pub fn normalize(&self, scores: &[f64]) -> Vec<u32> {
        let Some(range) = ScoreRange::of(scores) else {
            return Vec::new();
        };
        if range.is_degenerate() {
            return vec![1; scores.len()];
        }
        scores
            .iter()
            .map(|&score| self.scale(score, range))
            .collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "linear interpolation between the score bounds"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the floored offset is clamped to 0..=max-1 before the cast"
    )]
    fn scale(&self, score: f64, range: ScoreRange) -> u32 {
        let top = self.max.get();
        if score >= range.max {
            return top;
        }
        let steps = f64::from(top - 1);
        // Dividing before scaling keeps the intermediate finite; halving
        // covers ranges whose width itself overflows.
        let width = range.max - range.min;
        let fraction = if width.is_finite() {
            (score - range.min) / width
        } else {
            (score / 2.0 - range.min / 2.0) / (range.max / 2.0 - range.min / 2.0)
        };
        let scaled = (fraction * steps).floor();
        let offset = scaled.clamp(0.0, steps) as u32;
        (1 + offset).min(top)
    }
}
