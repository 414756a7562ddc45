use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use petgraph::stable_graph::NodeIndex;

use super::shortest_path::Route;
use crate::error::NetworkError;
use crate::graph::FacilityNetwork;

/// Min-heap entry ordered by priority (wrap in [`Reverse`])
///
/// Ties fall back to the node index so the pop order is deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: f64,
    pub(crate) node: NodeIndex,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Priority-queue relaxation state shared by the single-source searches
///
/// Callers drive the loop: take the next settled node, decide whether to
/// stop, otherwise relax its outgoing connections. All working arrays are
/// owned by one search and dropped with it.
pub(crate) struct RelaxationSearch<'a> {
    network: &'a FacilityNetwork,
    origin: NodeIndex,
    distance: Vec<f64>,
    predecessor: Vec<Option<NodeIndex>>,
    settled: Vec<bool>,
    frontier: BinaryHeap<Reverse<FrontierEntry>>,
    settled_count: usize,
}

impl<'a> RelaxationSearch<'a> {
    pub(crate) fn new(network: &'a FacilityNetwork, origin: NodeIndex) -> Self {
        let bound = network.node_bound();
        let mut distance = vec![f64::INFINITY; bound];
        distance[origin.index()] = 0.0;

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(FrontierEntry {
            priority: 0.0,
            node: origin,
        }));

        Self {
            network,
            origin,
            distance,
            predecessor: vec![None; bound],
            settled: vec![false; bound],
            frontier,
            settled_count: 0,
        }
    }

    /// Settle the closest node still on the frontier
    ///
    /// Returns `None` once the frontier is exhausted.
    pub(crate) fn next_settled(&mut self) -> Option<NodeIndex> {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            // Superseded entry for a node settled through a shorter path
            if self.settled[entry.node.index()] {
                continue;
            }
            self.settled[entry.node.index()] = true;
            self.settled_count += 1;
            return Some(entry.node);
        }
        None
    }

    /// Relax every outgoing connection of a settled node
    pub(crate) fn relax(&mut self, from: NodeIndex) {
        let base = self.distance[from.index()];

        for (to, connection) in self.network.successors(from) {
            let candidate = base + connection.distance();
            if !self.settled[to.index()] && candidate < self.distance[to.index()] {
                self.distance[to.index()] = candidate;
                self.predecessor[to.index()] = Some(from);
                self.frontier.push(Reverse(FrontierEntry {
                    priority: candidate,
                    node: to,
                }));
            }
        }
    }

    pub(crate) fn distance_to(&self, node: NodeIndex) -> f64 {
        self.distance[node.index()]
    }

    pub(crate) fn settled_count(&self) -> usize {
        self.settled_count
    }

    /// Walk predecessors back from `destination` and build the route
    pub(crate) fn into_route(self, destination: NodeIndex) -> Result<Route, NetworkError> {
        let mut path = vec![destination];
        let mut current = destination;

        while current != self.origin {
            // A chain longer than the arena means the predecessor map loops
            if path.len() > self.predecessor.len() {
                return Err(NetworkError::GraphError {
                    message: "predecessor chain does not terminate at the origin".to_string(),
                });
            }
            current = self.predecessor[current.index()].ok_or_else(|| {
                NetworkError::GraphError {
                    message: format!(
                        "facility {} has no predecessor on its shortest path",
                        self.network.facility_at(current).id()
                    ),
                }
            })?;
            path.push(current);
        }
        path.reverse();

        Route::from_path(self.network, &path, self.distance_to(destination))
    }
}
