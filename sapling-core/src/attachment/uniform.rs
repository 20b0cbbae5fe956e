//! Uniform random attachment.

use rand::Rng;

use crate::graph::Node;

/// Draws one node of `prior` uniformly, or `None` when `prior` is empty.
pub(super) fn uniform_parent<'a, R: Rng + ?Sized>(prior: &'a [Node], rng: &mut R) -> Option<&'a Node> {
    if prior.is_empty() {
        return None;
    }
    prior.get(rng.gen_range(0..prior.len()))
}
