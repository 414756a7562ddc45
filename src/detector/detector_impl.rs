use petgraph::stable_graph::NodeIndex;
use serde::Serialize;
use tracing::debug;

use crate::graph::{FacilityId, FacilityNetwork};

/// Depth-first detector reporting the first directed cycle it meets
#[derive(Debug, Default, Serialize)]
pub struct CycleDetector {
    cycle: Option<DirectedCycle>,
}

/// A closed walk through the network
///
/// The first facility is repeated at the end, so walking consecutive pairs
/// follows existing connections back to the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedCycle {
    facilities: Vec<FacilityId>,
    names: Vec<String>,
}

impl DirectedCycle {
    pub fn facilities(&self) -> &[FacilityId] {
        &self.facilities
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Connections making up the cycle, in walk order
    pub fn edges(&self) -> Vec<(FacilityId, FacilityId)> {
        self.facilities
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// Number of distinct facilities on the cycle
    pub fn len(&self) -> usize {
        self.facilities.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Frame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    next: usize,
}

impl Frame {
    fn new(network: &FacilityNetwork, node: NodeIndex) -> Self {
        Self {
            node,
            children: network
                .successors(node)
                .into_iter()
                .map(|(child, _)| child)
                .collect(),
            next: 0,
        }
    }
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search the whole network for a directed cycle
    ///
    /// Roots are tried in facility insertion order and children in
    /// connection order; the first back-edge found ends the search. Any
    /// result from a previous call is discarded.
    #[tracing::instrument(skip_all, fields(facilities = network.facility_count()))]
    pub fn detect_cycle(&mut self, network: &FacilityNetwork) -> bool {
        self.cycle = None;

        let bound = network.node_bound();
        let mut visited = vec![false; bound];
        let mut on_path = vec![false; bound];

        for root in network.node_indices_in_order() {
            if visited[root.index()] {
                continue;
            }

            visited[root.index()] = true;
            on_path[root.index()] = true;
            let mut path = vec![root];
            let mut stack = vec![Frame::new(network, root)];

            while let Some(frame) = stack.last_mut() {
                let Some(&child) = frame.children.get(frame.next) else {
                    on_path[frame.node.index()] = false;
                    path.pop();
                    stack.pop();
                    continue;
                };
                frame.next += 1;

                if on_path[child.index()] {
                    let start = path.iter().position(|&n| n == child).unwrap_or(0);
                    let mut walk = path[start..].to_vec();
                    walk.push(child);

                    let cycle = DirectedCycle {
                        facilities: walk
                            .iter()
                            .map(|&idx| network.facility_at(idx).id())
                            .collect(),
                        names: walk
                            .iter()
                            .map(|&idx| network.facility_at(idx).name().to_string())
                            .collect(),
                    };
                    debug!(length = cycle.len(), "cycle found");
                    self.cycle = Some(cycle);
                    return true;
                }

                if !visited[child.index()] {
                    visited[child.index()] = true;
                    on_path[child.index()] = true;
                    path.push(child);
                    stack.push(Frame::new(network, child));
                }
            }
        }

        debug!("network is acyclic");
        false
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Cycle found by the last [`detect_cycle`](Self::detect_cycle) call
    pub fn cycle(&self) -> Option<&DirectedCycle> {
        self.cycle.as_ref()
    }

    pub fn into_cycle(self) -> Option<DirectedCycle> {
        self.cycle
    }
}
