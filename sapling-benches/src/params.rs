//! Benchmark parameter types.

use std::fmt;

use sapling_core::TreeGeneratorBuilder;

/// Window side length used by closest-point benchmarks.
pub const WINDOW_SIDE: u32 = 1_000;

/// Power-law base used by power-law benchmarks.
pub const POWER_LAW_BASE: f64 = 0.5;

/// Attachment strategy exercised by a generation benchmark.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BenchStrategy {
    /// Uniform random attachment.
    Uniform,
    /// Power-law attachment with [`POWER_LAW_BASE`].
    PowerLaw,
    /// Closest-point attachment inside a [`WINDOW_SIDE`] square window.
    ClosestPoint,
}

impl BenchStrategy {
    /// Every strategy, in benchmark order.
    pub const ALL: [Self; 3] = [Self::Uniform, Self::PowerLaw, Self::ClosestPoint];

    /// Short label used in benchmark identifiers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::PowerLaw => "power_law",
            Self::ClosestPoint => "closest_point",
        }
    }
}

/// Parameters for a tree generation benchmark run.
#[derive(Clone, Debug)]
pub struct TreeBenchParams {
    /// Number of nodes in the generated tree.
    pub node_count: usize,
    /// Attachment strategy under test.
    pub strategy: BenchStrategy,
    /// Upper bound for edge weights, if weights are generated.
    pub edge_weight_max: Option<u32>,
}

impl TreeBenchParams {
    /// Returns a builder configured for this run.
    ///
    /// # Examples
    /// ```
    /// use sapling_benches::params::{BenchStrategy, TreeBenchParams};
    ///
    /// let params = TreeBenchParams {
    ///     node_count: 10,
    ///     strategy: BenchStrategy::ClosestPoint,
    ///     edge_weight_max: Some(5),
    /// };
    /// let generator = params.builder(3).build().expect("valid configuration");
    /// assert_eq!(generator.attachment().name(), "closest_point");
    /// ```
    #[must_use]
    pub fn builder(&self, seed: u64) -> TreeGeneratorBuilder {
        let seeded = TreeGeneratorBuilder::new(self.node_count).with_seed(seed);
        let configured = match self.strategy {
            BenchStrategy::Uniform => seeded,
            BenchStrategy::PowerLaw => seeded.with_power_law_base(POWER_LAW_BASE),
            BenchStrategy::ClosestPoint => seeded.with_window(WINDOW_SIDE, WINDOW_SIDE),
        };
        match self.edge_weight_max {
            Some(max) => configured.with_edge_weight_max(max),
            None => configured,
        }
    }
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.strategy.label(), self.node_count)?;
        if let Some(max) = self.edge_weight_max {
            write!(f, ",M={max}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BenchStrategy::Uniform, None, "uniform,n=50")]
    #[case(BenchStrategy::PowerLaw, Some(8), "power_law,n=50,M=8")]
    fn display_names_the_run(
        #[case] strategy: BenchStrategy,
        #[case] edge_weight_max: Option<u32>,
        #[case] expected: &str,
    ) {
        let params = TreeBenchParams {
            node_count: 50,
            strategy,
            edge_weight_max,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[rstest]
    fn every_strategy_builds() {
        for strategy in BenchStrategy::ALL {
            let params = TreeBenchParams {
                node_count: 5,
                strategy,
                edge_weight_max: Some(3),
            };
            let generator = params.builder(1).build().expect("configuration must be valid");
            assert_eq!(generator.attachment().name(), strategy.label());
        }
    }
}
