//! Closest-point attachment.

use crate::{
    Result,
    error::TreeError,
    geometry::euclidean_distance,
    graph::{Node, NodeId},
};

/// Finds the node of `prior` nearest to `node`.
///
/// Candidates are scanned oldest first and only a strictly smaller distance
/// replaces the current best, so ties resolve to the lowest identifier.
pub(super) fn closest_parent(prior: &[Node], node: &Node) -> Result<(NodeId, f64)> {
    let origin = node
        .position()
        .ok_or(TreeError::MissingGeometry { node: node.id() })?;

    let mut best: Option<(NodeId, f64)> = None;
    for candidate in prior {
        let position = candidate
            .position()
            .ok_or(TreeError::MissingGeometry {
                node: candidate.id(),
            })?;
        let distance = euclidean_distance(origin, position);
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((candidate.id(), distance));
        }
    }

    best.ok_or(TreeError::EmptyPrefix { node: node.id() })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::geometry::Position;

    fn positioned(points: &[(u32, u32)]) -> Vec<Node> {
        points
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| {
                Node::new(NodeId::from_index(index), Some(Position::new(x, y)), None)
            })
            .collect()
    }

    #[rstest]
    #[case::strictly_closer_second(&[(0, 0), (10, 0)], (9, 1), 2)]
    #[case::strictly_closer_first(&[(0, 0), (10, 0)], (1, 1), 1)]
    #[case::equidistant_prefers_oldest(&[(0, 0), (10, 0)], (5, 1), 1)]
    #[case::coincident_points(&[(4, 4), (4, 4), (4, 4)], (4, 4), 1)]
    #[case::later_tie_loses(&[(20, 20), (0, 0), (10, 0)], (5, 0), 2)]
    fn closest_parent_selects_first_minimum(
        #[case] prior: &[(u32, u32)],
        #[case] point: (u32, u32),
        #[case] expected: usize,
    ) {
        let nodes = positioned(prior);
        let node = Node::new(
            NodeId::from_index(nodes.len()),
            Some(Position::new(point.0, point.1)),
            None,
        );
        let (parent, _) = closest_parent(&nodes, &node).expect("all nodes are positioned");
        assert_eq!(parent.get(), expected);
    }

    #[test]
    fn closest_parent_reports_realised_distance() {
        let prior = positioned(&[(0, 0), (30, 40)]);
        let node = Node::new(NodeId::from_index(2), Some(Position::new(33, 44)), None);
        let (parent, distance) = closest_parent(&prior, &node).expect("positioned");
        assert_eq!(parent.get(), 2);
        assert_eq!(distance, 5.0);
    }

    #[test]
    fn closest_parent_rejects_unpositioned_candidates() {
        let mut prior = positioned(&[(0, 0)]);
        prior.push(Node::new(NodeId::from_index(1), None, None));
        let node = Node::new(NodeId::from_index(2), Some(Position::new(1, 1)), None);
        let err = closest_parent(&prior, &node).expect_err("candidate 2 lacks geometry");
        assert_eq!(
            err,
            TreeError::MissingGeometry {
                node: NodeId::from_index(1)
            }
        );
    }

    #[test]
    fn closest_parent_rejects_unpositioned_node() {
        let prior = positioned(&[(0, 0)]);
        let node = Node::new(NodeId::from_index(1), None, None);
        let err = closest_parent(&prior, &node).expect_err("node lacks geometry");
        assert_eq!(
            err,
            TreeError::MissingGeometry {
                node: NodeId::from_index(1)
            }
        );
    }
}
