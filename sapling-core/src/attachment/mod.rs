//! Attachment strategies deciding which earlier node a new node joins.
//!
//! Exactly one [`Attachment`] variant is active per generator. Every variant
//! only ever returns a node from the `prior` prefix it is given, so the
//! resulting edge set is a tree by construction.

mod closest;
mod power_law;
mod uniform;

use core::fmt;

use rand::Rng;

use crate::{
    Result,
    error::{ConfigError, TreeError},
    graph::{Node, NodeId},
};

/// Success ratio of power-law attachment, validated to lie in `(0, 1)`.
///
/// # Examples
/// ```
/// use sapling_core::PowerLawBase;
///
/// let base = PowerLawBase::new(0.5).expect("0.5 lies in (0, 1)");
/// assert_eq!(base.get(), 0.5);
/// assert!(PowerLawBase::new(1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerLawBase(f64);

impl PowerLawBase {
    /// Validates `base`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPowerLawBase`] unless `base` is finite
    /// and strictly between zero and one.
    pub const fn new(base: f64) -> core::result::Result<Self, ConfigError> {
        if base.is_finite() && base > 0.0 && base < 1.0 {
            Ok(Self(base))
        } else {
            Err(ConfigError::InvalidPowerLawBase { got: base })
        }
    }

    /// Returns the base.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// The parent selected for a node, plus the raw score the strategy measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParentChoice {
    parent: NodeId,
    distance: Option<f64>,
}

impl ParentChoice {
    const fn unscored(parent: &Node) -> Self {
        Self {
            parent: parent.id(),
            distance: None,
        }
    }

    /// The chosen parent.
    #[must_use]
    pub const fn parent(&self) -> NodeId {
        self.parent
    }

    /// Distance between the node and its parent; present for closest-point
    /// attachment only.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }
}

/// Strategy used to attach each new node to the growing tree.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use sapling_core::{Attachment, Node, NodeId, Position};
///
/// let prior = [
///     Node::new(NodeId::ROOT, Some(Position::new(0, 0)), None),
///     Node::new(NodeId::new(2).expect("non-zero"), Some(Position::new(10, 0)), None),
/// ];
/// let node = Node::new(NodeId::new(3).expect("non-zero"), Some(Position::new(9, 1)), None);
/// let mut rng = SmallRng::seed_from_u64(1);
/// let choice = Attachment::ClosestPoint
///     .choose_parent(&prior, &node, &mut rng)
///     .expect("all nodes are positioned");
/// assert_eq!(choice.parent().get(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Attachment {
    /// Attach to an earlier node chosen uniformly at random.
    Uniform,
    /// Accept the i-th oldest node with probability `base^i`, falling back to
    /// [`Attachment::Uniform`] when every candidate is rejected.
    PowerLaw(PowerLawBase),
    /// Attach to the nearest earlier node, preferring the oldest on ties.
    ClosestPoint,
}

impl Attachment {
    /// Stable name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::PowerLaw(_) => "power_law",
            Self::ClosestPoint => "closest_point",
        }
    }

    /// Returns `true` when the strategy needs positioned nodes.
    #[must_use]
    pub const fn requires_positions(&self) -> bool {
        matches!(self, Self::ClosestPoint)
    }

    /// Chooses the parent of `node` among `prior`, the nodes created before
    /// it in creation order.
    ///
    /// # Errors
    /// Returns [`TreeError::EmptyPrefix`] when `prior` is empty and, for
    /// [`Attachment::ClosestPoint`], [`TreeError::MissingGeometry`] when
    /// `node` or a candidate has no position.
    pub fn choose_parent<R: Rng + ?Sized>(
        &self,
        prior: &[Node],
        node: &Node,
        rng: &mut R,
    ) -> Result<ParentChoice> {
        let empty = || TreeError::EmptyPrefix { node: node.id() };
        match self {
            Self::Uniform => uniform::uniform_parent(prior, rng)
                .map(ParentChoice::unscored)
                .ok_or_else(empty),
            Self::PowerLaw(base) => power_law::power_law_parent(prior, *base, rng)
                .map(ParentChoice::unscored)
                .ok_or_else(empty),
            Self::ClosestPoint => {
                let (parent, distance) = closest::closest_parent(prior, node)?;
                Ok(ParentChoice {
                    parent,
                    distance: Some(distance),
                })
            }
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
