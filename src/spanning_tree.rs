//! Greedy minimum spanning tree grown from a root facility
//!
//! Keys are single connection distances. Only outgoing connections are
//! relaxed, but their cost is treated as undirected, so the result is a
//! spanning tree by edge weight rather than a shortest-path arborescence.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::NetworkError;
use crate::graph::{FacilityId, FacilityNetwork};
use crate::routing::frontier::FrontierEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    pub from: FacilityId,
    pub from_name: String,
    pub to: FacilityId,
    pub to_name: String,
    pub distance: f64,
}

/// Edges selected by [`minimum_spanning_tree`]
///
/// When some facilities cannot be reached from the root the result is a
/// partial tree; [`is_fully_connected`](Self::is_fully_connected) reports it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    pub root: FacilityId,
    pub edges: Vec<TreeEdge>,
    pub total_distance: f64,
    pub facility_count: usize,
}

impl SpanningTree {
    pub fn is_fully_connected(&self) -> bool {
        self.uncovered_count() == 0
    }

    /// Facilities the tree does not reach
    pub fn uncovered_count(&self) -> usize {
        self.facility_count
            .saturating_sub(1)
            .saturating_sub(self.edges.len())
    }
}

/// Run Prim's algorithm from `root`
///
/// Edges are listed in facility insertion order of their child endpoint.
#[tracing::instrument(skip(network))]
pub fn minimum_spanning_tree(
    network: &FacilityNetwork,
    root: FacilityId,
) -> Result<SpanningTree, NetworkError> {
    let start = network.index_of(root)?;

    let bound = network.node_bound();
    let mut key = vec![f64::INFINITY; bound];
    let mut parent = vec![None; bound];
    let mut settled = vec![false; bound];
    let mut frontier = BinaryHeap::new();

    key[start.index()] = 0.0;
    frontier.push(Reverse(FrontierEntry {
        priority: 0.0,
        node: start,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = entry.node;
        if settled[current.index()] {
            continue;
        }
        settled[current.index()] = true;

        for (next, connection) in network.successors(current) {
            let weight = connection.distance();
            if !settled[next.index()] && weight < key[next.index()] {
                key[next.index()] = weight;
                parent[next.index()] = Some(current);
                frontier.push(Reverse(FrontierEntry {
                    priority: weight,
                    node: next,
                }));
            }
        }
    }

    let mut edges = Vec::new();
    for child in network.node_indices_in_order() {
        if child == start || !settled[child.index()] {
            continue;
        }
        let Some(from) = parent[child.index()] else {
            continue;
        };
        let (from_facility, to_facility) = (network.facility_at(from), network.facility_at(child));
        edges.push(TreeEdge {
            from: from_facility.id(),
            from_name: from_facility.name().to_string(),
            to: to_facility.id(),
            to_name: to_facility.name().to_string(),
            distance: key[child.index()],
        });
    }

    let tree = SpanningTree {
        root,
        total_distance: edges.iter().map(|edge| edge.distance).sum(),
        edges,
        facility_count: network.facility_count(),
    };

    if tree.is_fully_connected() {
        debug!(edges = tree.edges.len(), "spanning tree complete");
    } else {
        warn!(
            uncovered = tree.uncovered_count(),
            "network is not fully connected from the root"
        );
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::{Connection, Facility};

    fn network(ids: &[i64], edges: &[(i64, i64, f64)]) -> FacilityNetwork {
        let facilities = ids.iter().map(|&id| {
            Facility::builder()
                .with_id(FacilityId::new(id))
                .with_name(&format!("Node {id}"))
                .with_region("Plains")
                .with_coordinates(0.0, 0.0)
                .with_capacity(2)
                .build()
                .unwrap()
        });
        let connections = edges.iter().map(|&(from, to, distance)| {
            Connection::builder()
                .with_from(FacilityId::new(from))
                .with_to(FacilityId::new(to))
                .with_distance(distance)
                .with_travel_time(1)
                .build()
                .unwrap()
        });
        FacilityNetwork::from_records(facilities, connections).unwrap()
    }

    fn pairs(tree: &SpanningTree) -> Vec<(i64, i64)> {
        tree.edges
            .iter()
            .map(|edge| (edge.from.value(), edge.to.value()))
            .collect()
    }

    #[test]
    fn test_picks_cheapest_connecting_edges() {
        let network = network(
            &[1, 2, 3],
            &[(1, 2, 10.0), (2, 3, 5.0), (1, 3, 20.0)],
        );

        let tree = minimum_spanning_tree(&network, FacilityId::new(1)).unwrap();

        assert_eq!(pairs(&tree), vec![(1, 2), (2, 3)]);
        assert_eq!(tree.total_distance, 15.0);
        assert!(tree.is_fully_connected());
    }

    #[test]
    fn test_key_is_edge_weight_not_path_length() {
        // Through 2 the path to 3 is 5 long against a direct 4, but the
        // connecting edge 2 -> 3 costs only 3
        let network = network(
            &[1, 2, 3],
            &[(1, 2, 2.0), (1, 3, 4.0), (2, 3, 3.0)],
        );

        let tree = minimum_spanning_tree(&network, FacilityId::new(1)).unwrap();

        assert_eq!(pairs(&tree), vec![(1, 2), (2, 3)]);
        assert_eq!(tree.total_distance, 5.0);
    }

    #[test]
    fn test_disconnected_network_is_reported() {
        let network = network(&[1, 2, 3, 4], &[(1, 2, 1.0), (3, 4, 1.0)]);

        let tree = minimum_spanning_tree(&network, FacilityId::new(1)).unwrap();

        assert_eq!(tree.edges.len(), 1);
        assert!(!tree.is_fully_connected());
        assert_eq!(tree.uncovered_count(), 2);
    }

    #[test]
    fn test_single_facility() {
        let network = network(&[9], &[]);

        let tree = minimum_spanning_tree(&network, FacilityId::new(9)).unwrap();

        assert!(tree.edges.is_empty());
        assert!(tree.is_fully_connected());
        assert_eq!(tree.total_distance, 0.0);
    }

    #[test]
    fn test_unknown_root() {
        let network = network(&[1], &[]);

        let err = minimum_spanning_tree(&network, FacilityId::new(2)).unwrap_err();
        assert!(matches!(err, NetworkError::NotFound { .. }));
    }
}
