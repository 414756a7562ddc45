//! Breadth-first reachability walk

use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::error::NetworkError;
use crate::graph::{Facility, FacilityId, FacilityNetwork};

/// Facilities reachable from an origin, in breadth-first visitation order
///
/// The origin is always the first entry.
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    pub origin: FacilityId,
    pub visited: Vec<Facility>,
}

impl Traversal {
    pub fn ids(&self) -> Vec<FacilityId> {
        self.visited.iter().map(Facility::id).collect()
    }

    /// Number of facilities reached besides the origin
    pub fn reached(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }
}

/// Walk the network breadth-first from `origin`
///
/// Ties are broken by the order connections were added, never by id value.
/// Facilities the origin cannot reach are absent from the result.
#[tracing::instrument(skip(network))]
pub fn breadth_first(
    network: &FacilityNetwork,
    origin: FacilityId,
) -> Result<Traversal, NetworkError> {
    let start = network.index_of(origin)?;

    let mut visited = vec![false; network.node_bound()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(network.facility_at(current).clone());

        for (next, _) in network.successors(current) {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    debug!(visited = order.len(), "breadth-first walk complete");

    Ok(Traversal {
        origin,
        visited: order,
    })
}
