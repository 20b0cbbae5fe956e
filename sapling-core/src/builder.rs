//! Builder utilities for configuring tree generation.
//!
//! All validation happens in [`TreeGeneratorBuilder::build`], so a
//! [`TreeGenerator`] can only exist with a consistent configuration and a
//! single attachment strategy.

use std::num::{NonZeroU32, NonZeroUsize};

use crate::{
    Result,
    attachment::{Attachment, PowerLawBase},
    error::ConfigError,
    generator::TreeGenerator,
    geometry::{DEFAULT_PADDING, Placement, Window},
};

/// Configures and constructs [`TreeGenerator`] instances.
///
/// The attachment strategy follows from the options: a window selects
/// closest-point attachment, a power-law base selects power-law attachment,
/// and neither selects uniform attachment. Requesting both is rejected.
///
/// # Examples
/// ```
/// use sapling_core::{Attachment, TreeGeneratorBuilder};
///
/// let generator = TreeGeneratorBuilder::new(16)
///     .with_window(800, 600)
///     .with_padding(20)
///     .with_edge_weight_max(10)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_count().get(), 16);
/// assert_eq!(generator.attachment(), Attachment::ClosestPoint);
/// ```
#[derive(Debug, Clone)]
pub struct TreeGeneratorBuilder {
    node_count: usize,
    edge_weight_max: Option<u32>,
    node_weight_max: Option<u32>,
    window: Option<Window>,
    padding: u32,
    power_law_base: Option<f64>,
    seed: Option<u64>,
}

impl TreeGeneratorBuilder {
    /// Creates a builder for a tree of `node_count` nodes with default
    /// options: uniform attachment, no weights, no positions, padding
    /// [`DEFAULT_PADDING`] and an entropy-derived seed.
    ///
    /// # Examples
    /// ```
    /// use sapling_core::TreeGeneratorBuilder;
    ///
    /// let builder = TreeGeneratorBuilder::new(4);
    /// assert_eq!(builder.node_count(), 4);
    /// assert_eq!(builder.padding(), 50);
    /// ```
    #[must_use]
    pub const fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edge_weight_max: None,
            node_weight_max: None,
            window: None,
            padding: DEFAULT_PADDING,
            power_law_base: None,
            seed: None,
        }
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Requests edge weights in `1..=max`.
    ///
    /// Positioned trees derive edge weights from scaled distances; otherwise
    /// they are drawn uniformly.
    #[must_use]
    pub const fn with_edge_weight_max(mut self, max: u32) -> Self {
        self.edge_weight_max = Some(max);
        self
    }

    /// Requests node weights drawn uniformly from `1..=max`.
    #[must_use]
    pub const fn with_node_weight_max(mut self, max: u32) -> Self {
        self.node_weight_max = Some(max);
        self
    }

    /// Positions nodes inside a `width` by `height` window and attaches each
    /// node to its closest predecessor.
    #[must_use]
    pub const fn with_window(mut self, width: u32, height: u32) -> Self {
        self.window = Some(Window::new(width, height));
        self
    }

    /// Overrides the margin between sampled positions and the window edges.
    ///
    /// Only meaningful together with [`Self::with_window`].
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the configured padding.
    #[must_use]
    pub const fn padding(&self) -> u32 {
        self.padding
    }

    /// Selects power-law attachment with the given base.
    #[must_use]
    pub const fn with_power_law_base(mut self, base: f64) -> Self {
        self.power_law_base = Some(base);
        self
    }

    /// Fixes the seed so runs are reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and constructs a [`TreeGenerator`].
    ///
    /// # Errors
    /// Returns [`crate::TreeError::InvalidConfiguration`] wrapping the first
    /// [`ConfigError`] found.
    ///
    /// # Examples
    /// ```
    /// use sapling_core::{ConfigError, TreeError, TreeGeneratorBuilder};
    ///
    /// let err = TreeGeneratorBuilder::new(8)
    ///     .with_window(400, 400)
    ///     .with_power_law_base(0.5)
    ///     .build()
    ///     .expect_err("geometry and power-law conflict");
    /// assert_eq!(
    ///     err,
    ///     TreeError::InvalidConfiguration(ConfigError::ConflictingAttachment)
    /// );
    /// ```
    pub fn build(self) -> Result<TreeGenerator> {
        let node_count = NonZeroUsize::new(self.node_count).ok_or(ConfigError::ZeroNodeCount {
            got: self.node_count,
        })?;

        let edge_weight_max = self
            .edge_weight_max
            .map(|max| NonZeroU32::new(max).ok_or(ConfigError::ZeroEdgeWeightMax { got: max }))
            .transpose()?;
        let node_weight_max = self
            .node_weight_max
            .map(|max| NonZeroU32::new(max).ok_or(ConfigError::ZeroNodeWeightMax { got: max }))
            .transpose()?;

        let (attachment, placement) = match (self.window, self.power_law_base) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingAttachment.into()),
            (Some(window), None) => (
                Attachment::ClosestPoint,
                Some(Placement::new(window, self.padding)?),
            ),
            (None, Some(base)) => (Attachment::PowerLaw(PowerLawBase::new(base)?), None),
            (None, None) => (Attachment::Uniform, None),
        };

        Ok(TreeGenerator::new(
            node_count,
            attachment,
            placement,
            edge_weight_max,
            node_weight_max,
            self.seed,
        ))
    }
}
