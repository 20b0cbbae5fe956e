//! Error types for the sapling core library.
//!
//! Configuration problems are reported by [`crate::TreeGeneratorBuilder::build`]
//! before any generation work starts; generation itself only fails when an
//! attachment strategy is handed nodes it cannot work with.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A rejected [`crate::TreeGeneratorBuilder`] configuration.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A tree needs at least its root node.
    #[error("node_count must be at least 1 (got {got})")]
    ZeroNodeCount {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// Node positions were requested inside a window with no area.
    #[error("window must have positive width and height (got {width}x{height})")]
    EmptyWindow {
        /// Requested window width.
        width: u32,
        /// Requested window height.
        height: u32,
    },
    /// Padding leaves no room for positions inside the window.
    #[error("padding {padding} leaves no room inside a {width}x{height} window")]
    PaddingTooLarge {
        /// Requested padding.
        padding: u32,
        /// Requested window width.
        width: u32,
        /// Requested window height.
        height: u32,
    },
    /// Power-law base must lie strictly between zero and one.
    #[error("power_law_base must lie strictly between 0 and 1 (got {got})")]
    InvalidPowerLawBase {
        /// The base supplied by the caller.
        got: f64,
    },
    /// Geometry selects closest-point attachment, which cannot be combined
    /// with power-law attachment.
    #[error("node positions and power_law_base select different attachment strategies")]
    ConflictingAttachment,
    /// Edge weight maximum must be at least one.
    #[error("edge_weight_max must be at least 1 (got {got})")]
    ZeroEdgeWeightMax {
        /// The maximum supplied by the caller.
        got: u32,
    },
    /// Node weight maximum must be at least one.
    #[error("node_weight_max must be at least 1 (got {got})")]
    ZeroNodeWeightMax {
        /// The maximum supplied by the caller.
        got: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// A tree needs at least its root node.
        ZeroNodeCount => ZeroNodeCount { .. } => "CONFIG_ZERO_NODE_COUNT",
        /// Node positions were requested inside a window with no area.
        EmptyWindow => EmptyWindow { .. } => "CONFIG_EMPTY_WINDOW",
        /// Padding leaves no room for positions inside the window.
        PaddingTooLarge => PaddingTooLarge { .. } => "CONFIG_PADDING_TOO_LARGE",
        /// Power-law base must lie strictly between zero and one.
        InvalidPowerLawBase => InvalidPowerLawBase { .. } => "CONFIG_INVALID_POWER_LAW_BASE",
        /// Geometry and power-law attachment were both requested.
        ConflictingAttachment => ConflictingAttachment => "CONFIG_CONFLICTING_ATTACHMENT",
        /// Edge weight maximum must be at least one.
        ZeroEdgeWeightMax => ZeroEdgeWeightMax { .. } => "CONFIG_ZERO_EDGE_WEIGHT_MAX",
        /// Node weight maximum must be at least one.
        ZeroNodeWeightMax => ZeroNodeWeightMax { .. } => "CONFIG_ZERO_NODE_WEIGHT_MAX",
    }
}

/// Error type produced when configuring or running a [`crate::TreeGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TreeError {
    /// The configuration was rejected before generation started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Closest-point attachment met a node without a position.
    #[error("node {node} has no position but closest-point attachment requires one")]
    MissingGeometry {
        /// The node lacking a position.
        node: NodeId,
    },
    /// An attachment was requested for a node with no earlier nodes.
    #[error("node {node} has no earlier node to attach to")]
    EmptyPrefix {
        /// The node that could not be attached.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`TreeError`] variants.
    enum TreeErrorCode for TreeError {
        /// The configuration was rejected before generation started.
        InvalidConfiguration => InvalidConfiguration(..) => "TREE_INVALID_CONFIGURATION",
        /// Closest-point attachment met a node without a position.
        MissingGeometry => MissingGeometry { .. } => "TREE_MISSING_GEOMETRY",
        /// An attachment was requested for a node with no earlier nodes.
        EmptyPrefix => EmptyPrefix { .. } => "TREE_EMPTY_PREFIX",
    }
}

impl TreeError {
    /// Retrieve the inner [`ConfigErrorCode`] when the configuration was rejected.
    #[must_use]
    pub const fn config_code(&self) -> Option<ConfigErrorCode> {
        match self {
            Self::InvalidConfiguration(error) => Some(error.code()),
            Self::MissingGeometry { .. } | Self::EmptyPrefix { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TreeError>;
