//! Uniform position sampling inside a padded window.

use std::ops::RangeInclusive;

use rand::Rng;

use super::Position;
use crate::error::ConfigError;

/// Padding applied when the caller does not choose one.
pub const DEFAULT_PADDING: u32 = 50;

/// Drawing area requested for positioned trees.
///
/// # Examples
/// ```
/// use sapling_core::Window;
///
/// let window = Window::new(800, 600);
/// assert_eq!((window.width(), window.height()), (800, 600));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Window {
    width: u32,
    height: u32,
}

impl Window {
    /// Creates a window of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Window width.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Window height.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }
}

/// A window together with the margin that sampled positions keep from its
/// edges.
///
/// Construction guarantees both coordinate ranges are non-empty.
///
/// # Examples
/// ```
/// use sapling_core::{Placement, Window};
///
/// let placement = Placement::new(Window::new(100, 60), 10).expect("padding fits");
/// assert_eq!(placement.x_range(), 10..=90);
/// assert_eq!(placement.y_range(), 10..=50);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placement {
    window: Window,
    padding: u32,
}

impl Placement {
    /// Validates `padding` against `window`.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyWindow`] when either dimension is zero and
    /// [`ConfigError::PaddingTooLarge`] when twice the padding reaches the
    /// width or the height.
    pub fn new(window: Window, padding: u32) -> Result<Self, ConfigError> {
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: window.width,
                height: window.height,
            });
        }

        let margin = u64::from(padding) * 2;
        if margin >= u64::from(window.width) || margin >= u64::from(window.height) {
            return Err(ConfigError::PaddingTooLarge {
                padding,
                width: window.width,
                height: window.height,
            });
        }

        Ok(Self { window, padding })
    }

    /// The window positions are drawn in.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Margin kept from every window edge.
    #[must_use]
    pub const fn padding(&self) -> u32 {
        self.padding
    }

    /// Closed range of admissible horizontal coordinates.
    #[must_use]
    pub const fn x_range(&self) -> RangeInclusive<u32> {
        self.padding..=self.window.width - self.padding
    }

    /// Closed range of admissible vertical coordinates.
    #[must_use]
    pub const fn y_range(&self) -> RangeInclusive<u32> {
        self.padding..=self.window.height - self.padding
    }

    /// Returns `true` when `position` lies inside the padded window.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.x_range().contains(&position.x()) && self.y_range().contains(&position.y())
    }
}

/// Draws `count` independent uniform positions inside `placement`.
///
/// Each position consumes two draws from `rng`: the x coordinate, then the y
/// coordinate. Distinct nodes may share a position.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use sapling_core::{Placement, Window, sample_positions};
///
/// let placement = Placement::new(Window::new(200, 100), 20).expect("padding fits");
/// let mut rng = SmallRng::seed_from_u64(7);
/// let positions = sample_positions(5, &placement, &mut rng);
/// assert_eq!(positions.len(), 5);
/// assert!(positions.iter().all(|position| placement.contains(*position)));
/// ```
pub fn sample_positions<R: Rng + ?Sized>(
    count: usize,
    placement: &Placement,
    rng: &mut R,
) -> Vec<Position> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(placement.x_range());
            let y = rng.gen_range(placement.y_range());
            Position::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case::zero_width(Window::new(0, 10), 0)]
    #[case::zero_height(Window::new(10, 0), 0)]
    fn placement_rejects_empty_windows(#[case] window: Window, #[case] padding: u32) {
        let err = Placement::new(window, padding).expect_err("empty window must fail");
        assert!(matches!(err, ConfigError::EmptyWindow { .. }));
    }

    #[rstest]
    #[case::width_exhausted(Window::new(100, 500), 50)]
    #[case::height_exhausted(Window::new(500, 100), 50)]
    #[case::overflowing_padding(Window::new(10, 10), u32::MAX)]
    fn placement_rejects_oversized_padding(#[case] window: Window, #[case] padding: u32) {
        let err = Placement::new(window, padding).expect_err("padding must not fit");
        assert_eq!(
            err,
            ConfigError::PaddingTooLarge {
                padding,
                width: window.width(),
                height: window.height(),
            }
        );
    }

    #[test]
    fn placement_accepts_tightest_padding() {
        let placement = Placement::new(Window::new(101, 101), 50).expect("one pixel remains");
        assert_eq!(placement.x_range(), 50..=51);
        assert_eq!(placement.y_range(), 50..=51);
    }

    #[rstest]
    #[case(1)]
    #[case(64)]
    #[case(1_000)]
    fn sample_positions_stay_inside_the_padded_window(#[case] seed: u64) {
        let placement = Placement::new(Window::new(640, 480), 50).expect("padding fits");
        let mut rng = SmallRng::seed_from_u64(seed);
        let positions = sample_positions(200, &placement, &mut rng);
        assert_eq!(positions.len(), 200);
        for position in positions {
            assert!(placement.contains(position), "{position} escaped the window");
        }
    }

    #[test]
    fn sample_positions_is_deterministic_per_seed() {
        let placement = Placement::new(Window::new(300, 300), 10).expect("padding fits");
        let first = sample_positions(32, &placement, &mut SmallRng::seed_from_u64(11));
        let second = sample_positions(32, &placement, &mut SmallRng::seed_from_u64(11));
        assert_eq!(first, second);
    }

    #[test]
    fn sample_positions_reach_both_bounds_inclusively() {
        let placement = Placement::new(Window::new(2, 2), 0).expect("no padding");
        let positions = sample_positions(200, &placement, &mut SmallRng::seed_from_u64(3));
        for x in 0..=2 {
            assert!(positions.iter().any(|position| position.x() == x), "x={x} never drawn");
        }
        for y in 0..=2 {
            assert!(positions.iter().any(|position| position.y() == y), "y={y} never drawn");
        }
    }
}
