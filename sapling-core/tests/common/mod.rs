//! Shared helpers for the sapling-core integration tests.

use sapling_core::{Edge, GeneratedTree, TreeGeneratorBuilder};

/// Attachment modes exercised by the property suites.
#[derive(Clone, Copy, Debug)]
pub enum Mode {
    Uniform,
    PowerLaw(f64),
    ClosestPoint,
}

impl Mode {
    pub fn configure(self, builder: TreeGeneratorBuilder) -> TreeGeneratorBuilder {
        match self {
            Self::Uniform => builder,
            Self::PowerLaw(base) => builder.with_power_law_base(base),
            Self::ClosestPoint => builder.with_window(400, 300).with_padding(10),
        }
    }
}

/// Generates a seeded tree of `node_count` nodes.
pub fn seeded_tree(node_count: usize, mode: Mode, seed: u64) -> GeneratedTree {
    let builder = mode.configure(TreeGeneratorBuilder::new(node_count).with_seed(seed));
    match builder.build().and_then(|generator| generator.generate()) {
        Ok(tree) => tree,
        Err(err) => panic!("generation failed for {mode:?}, n={node_count}, seed={seed}: {err}"),
    }
}

/// Returns `true` when `edges` form a spanning tree over ids `1..=node_count`.
pub fn is_spanning_tree(node_count: usize, edges: &[Edge]) -> bool {
    if edges.len() + 1 != node_count {
        return false;
    }
    let mut forest = DisjointSets::new(node_count);
    edges.iter().all(|edge| {
        let (Some(source), Some(target)) = (
            edge.source().get().checked_sub(1),
            edge.target().get().checked_sub(1),
        ) else {
            return false;
        };
        source < node_count && target < node_count && forest.union(source, target)
    })
}

struct DisjointSets {
    parents: Vec<usize>,
}

#[expect(
    clippy::indexing_slicing,
    reason = "set indices are bounded by the node count checked by the caller"
)]
impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
        }
    }

    fn find(&mut self, mut item: usize) -> usize {
        while self.parents[item] != item {
            let grandparent = self.parents[self.parents[item]];
            self.parents[item] = grandparent;
            item = grandparent;
        }
        item
    }

    /// Merges the sets of `left` and `right`; returns `false` when they were
    /// already joined, i.e. the edge would close a cycle.
    fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parents[right_root] = left_root;
        true
    }
}
