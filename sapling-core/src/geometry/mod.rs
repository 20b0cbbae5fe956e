//! Planar geometry for positioned trees.
//!
//! Positions are integer pixel coordinates drawn inside a padded window; the
//! only metric the generator needs is the Euclidean distance between two of
//! them.

mod distance;
mod sampler;

pub use self::distance::euclidean_distance;
pub use self::sampler::{DEFAULT_PADDING, Placement, Window, sample_positions};

use core::fmt;

/// Integer coordinates of a node inside its window.
///
/// # Examples
/// ```
/// use sapling_core::Position;
///
/// let position = Position::new(10, 20);
/// assert_eq!((position.x(), position.y()), (10, 20));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(self) -> u32 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(self) -> u32 {
        self.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
