//! Euclidean distance between node positions.

use super::Position;

/// Computes the Euclidean distance between two positions.
///
/// # Examples
///
/// ```
/// use sapling_core::{Position, euclidean_distance};
///
/// let distance = euclidean_distance(Position::new(1, 2), Position::new(4, 6));
/// assert!((distance - 5.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance is computed in floating point"
)]
pub fn euclidean_distance(left: Position, right: Position) -> f64 {
    let dx = f64::from(left.x()) - f64::from(right.x());
    let dy = f64::from(left.y()) - f64::from(right.y());
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::identical((7, 7), (7, 7), 0.0)]
    #[case::horizontal((0, 0), (10, 0), 10.0)]
    #[case::pythagorean((0, 0), (3, 4), 5.0)]
    #[case::diagonal_unit((5, 1), (10, 0), 26.0_f64.sqrt())]
    fn euclidean_distance_returns_expected(
        #[case] a: (u32, u32),
        #[case] b: (u32, u32),
        #[case] expected: f64,
    ) {
        let left = Position::new(a.0, a.1);
        let right = Position::new(b.0, b.1);
        assert!((euclidean_distance(left, right) - expected).abs() < 1e-12);
        assert!((euclidean_distance(right, left) - expected).abs() < 1e-12);
    }

    #[test]
    fn euclidean_distance_handles_extreme_coordinates() {
        let distance = euclidean_distance(Position::new(0, 0), Position::new(u32::MAX, 0));
        assert!((distance - f64::from(u32::MAX)).abs() < 1e-3);
    }
}
