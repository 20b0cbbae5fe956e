//! Power-law attachment: geometrically decaying preference for old nodes.

use rand::{Rng, distributions::Standard};

use super::{PowerLawBase, uniform::uniform_parent};
use crate::graph::Node;

/// Scans `prior` oldest first, accepting the i-th candidate with probability
/// `base^i`. Falls back to a uniform draw when every candidate is rejected.
#[expect(
    clippy::float_arithmetic,
    reason = "acceptance probabilities decay geometrically"
)]
pub(super) fn power_law_parent<'a, R: Rng + ?Sized>(
    prior: &'a [Node],
    base: PowerLawBase,
    rng: &mut R,
) -> Option<&'a Node> {
    let mut acceptance = base.get();
    for candidate in prior {
        // Once `base^i` underflows no later candidate can be accepted.
        if acceptance <= 0.0 {
            break;
        }
        let draw: f64 = rng.sample(Standard);
        if draw <= acceptance {
            return Some(candidate);
        }
        acceptance *= base.get();
    }
    uniform_parent(prior, rng)
}
