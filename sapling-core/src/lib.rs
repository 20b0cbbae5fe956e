//! Sapling core library.
//!
//! Generates random trees over `N` nodes for use as graph-drawing and
//! graph-algorithm test input. Each node after the root attaches to exactly
//! one earlier node, chosen uniformly, with a power-law preference for old
//! nodes, or as the nearest earlier node when nodes are positioned inside a
//! window. Nodes and edges may additionally carry bounded integer weights.
//!
//! # Examples
//! ```
//! use sapling_core::TreeGeneratorBuilder;
//!
//! let tree = TreeGeneratorBuilder::new(5)
//!     .with_window(640, 480)
//!     .with_edge_weight_max(9)
//!     .with_seed(42)
//!     .build()?
//!     .generate()?;
//! assert_eq!(tree.nodes().len(), 5);
//! assert_eq!(tree.edges().len(), 4);
//! # Ok::<(), sapling_core::TreeError>(())
//! ```

mod attachment;
mod builder;
mod error;
mod generator;
mod geometry;
mod graph;
mod weights;

pub use crate::{
    attachment::{Attachment, ParentChoice, PowerLawBase},
    builder::TreeGeneratorBuilder,
    error::{ConfigError, ConfigErrorCode, Result, TreeError, TreeErrorCode},
    generator::TreeGenerator,
    geometry::{DEFAULT_PADDING, Placement, Position, Window, euclidean_distance, sample_positions},
    graph::{Edge, GeneratedTree, Node, NodeId},
    weights::{ScoreRange, WeightNormalizer, draw_weight},
};
