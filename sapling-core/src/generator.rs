//! Tree assembly.
//!
//! Provides [`TreeGenerator`], which materialises nodes, attaches them one by
//! one in creation order and finally assigns edge weights.

use std::num::{NonZeroU32, NonZeroUsize};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument, trace};

use crate::{
    Result,
    attachment::Attachment,
    geometry::{Placement, Position, sample_positions},
    graph::{Edge, GeneratedTree, Node, NodeId},
    weights::{WeightNormalizer, draw_weight},
};

/// A validated tree generation configuration.
///
/// Built by [`crate::TreeGeneratorBuilder`]. One run owns one random number
/// generator and consumes it sequentially: positions for every node first
/// (x then y), then node weights, then for each node in turn its attachment
/// draws followed by its edge weight draw.
///
/// # Examples
/// ```
/// use sapling_core::TreeGeneratorBuilder;
///
/// let generator = TreeGeneratorBuilder::new(4)
///     .with_seed(1)
///     .build()
///     .expect("builder must succeed");
/// let tree = generator.generate().expect("generation must succeed");
/// assert_eq!(tree.edges().len(), 3);
/// assert!(tree
///     .edges()
///     .iter()
///     .all(|edge| edge.source() < edge.target()));
/// assert_eq!(tree, generator.generate().expect("generation must succeed"));
/// ```
#[derive(Debug, Clone)]
pub struct TreeGenerator {
    node_count: NonZeroUsize,
    attachment: Attachment,
    placement: Option<Placement>,
    edge_weight_max: Option<NonZeroU32>,
    node_weight_max: Option<NonZeroU32>,
    seed: Option<u64>,
}

impl TreeGenerator {
    pub(crate) const fn new(
        node_count: NonZeroUsize,
        attachment: Attachment,
        placement: Option<Placement>,
        edge_weight_max: Option<NonZeroU32>,
        node_weight_max: Option<NonZeroU32>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            node_count,
            attachment,
            placement,
            edge_weight_max,
            node_weight_max,
            seed,
        }
    }

    /// Number of nodes in every generated tree.
    #[must_use]
    pub const fn node_count(&self) -> NonZeroUsize {
        self.node_count
    }

    /// The attachment strategy selected at build time.
    #[must_use]
    pub const fn attachment(&self) -> Attachment {
        self.attachment
    }

    /// Window and padding for positioned trees.
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Upper bound of edge weights, when requested.
    #[must_use]
    pub const fn edge_weight_max(&self) -> Option<NonZeroU32> {
        self.edge_weight_max
    }

    /// Upper bound of node weights, when requested.
    #[must_use]
    pub const fn node_weight_max(&self) -> Option<NonZeroU32> {
        self.node_weight_max
    }

    /// Configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a tree from the configured seed, or from operating-system
    /// entropy when no seed was configured.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::generate_with_rng`].
    pub fn generate(&self) -> Result<GeneratedTree> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let tree = self.generate_with_rng(&mut rng)?;
        let (nodes, edges) = tree.into_parts();
        Ok(GeneratedTree::new(nodes, edges, self.seed))
    }

    /// Generates a tree drawing every random value from `rng`.
    ///
    /// # Errors
    /// Returns [`crate::TreeError::MissingGeometry`] if closest-point
    /// attachment meets an unpositioned node. A generator produced by
    /// [`crate::TreeGeneratorBuilder`] always positions nodes when it uses
    /// closest-point attachment.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use sapling_core::TreeGeneratorBuilder;
    ///
    /// let generator = TreeGeneratorBuilder::new(10)
    ///     .with_power_law_base(0.5)
    ///     .with_node_weight_max(3)
    ///     .build()
    ///     .expect("builder must succeed");
    /// let mut rng = SmallRng::seed_from_u64(5);
    /// let tree = generator.generate_with_rng(&mut rng).expect("generation must succeed");
    /// assert_eq!(tree.nodes().len(), 10);
    /// assert!(tree.nodes().iter().all(|node| node.weight().is_some()));
    /// assert!(tree.edges().iter().all(|edge| edge.weight().is_none()));
    /// ```
    #[instrument(
        name = "tree.generate",
        err,
        skip(self, rng),
        fields(
            node_count = self.node_count.get(),
            attachment = %self.attachment,
            seed = field::Empty,
            edges = field::Empty,
        ),
    )]
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedTree> {
        if let Some(seed) = self.seed {
            Span::current().record("seed", seed);
        }
        let nodes = self.materialise_nodes(rng);
        let edges = self.attach_nodes(&nodes, rng)?;

        Span::current().record("edges", edges.len());
        info!(
            nodes = nodes.len(),
            edges = edges.len(),
            "tree generated"
        );
        Ok(GeneratedTree::new(nodes, edges, None))
    }

    fn materialise_nodes<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Node> {
        let count = self.node_count.get();
        let positions: Vec<Option<Position>> = match &self.placement {
            Some(placement) => {
                debug!(
                    width = placement.window().width(),
                    height = placement.window().height(),
                    padding = placement.padding(),
                    "sampling node positions"
                );
                sample_positions(count, placement, rng)
                    .into_iter()
                    .map(Some)
                    .collect()
            }
            None => vec![None; count],
        };
        let weights: Vec<Option<u32>> = match self.node_weight_max {
            Some(max) => (0..count).map(|_| Some(draw_weight(max, rng))).collect(),
            None => vec![None; count],
        };

        positions
            .into_iter()
            .zip(weights)
            .enumerate()
            .map(|(index, (position, weight))| Node::new(NodeId::from_index(index), position, weight))
            .collect()
    }

    fn attach_nodes<R: Rng + ?Sized>(&self, nodes: &[Node], rng: &mut R) -> Result<Vec<Edge>> {
        let mut edges = Vec::with_capacity(nodes.len().saturating_sub(1));
        let mut distances = Vec::new();

        for index in 1..nodes.len() {
            let (prior, rest) = nodes.split_at(index);
            let Some(node) = rest.first() else {
                break;
            };
            let choice = self.attachment.choose_parent(prior, node, rng)?;
            trace!(node = %node.id(), parent = %choice.parent(), "attached node");

            let weight = match (choice.distance(), self.edge_weight_max) {
                (Some(distance), _) => {
                    distances.push(distance);
                    None
                }
                (None, Some(max)) => Some(draw_weight(max, rng)),
                (None, None) => None,
            };
            edges.push(Edge::new(choice.parent(), node.id(), weight));
        }

        match self.edge_weight_max {
            Some(max) if !distances.is_empty() => {
                let weights = WeightNormalizer::new(max).normalize(&distances);
                debug!(edges = weights.len(), max = max.get(), "normalised edge distances");
                Ok(edges
                    .into_iter()
                    .zip(weights)
                    .map(|(edge, weight)| edge.with_weight(weight))
                    .collect())
            }
            _ => Ok(edges),
        }
    }
}
