//! Benchmark support crate for sapling.
//!
//! Provides parameter types and synthetic inputs used by the Criterion
//! benchmarks for tree generation and weight normalisation.

pub mod params;
pub mod scores;
