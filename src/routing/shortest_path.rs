use petgraph::stable_graph::NodeIndex;
use serde::Serialize;
use tracing::debug;

use super::frontier::RelaxationSearch;
use crate::error::NetworkError;
use crate::graph::{FacilityId, FacilityNetwork};

/// A path between two facilities with per-connection detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub origin: FacilityId,
    pub destination: FacilityId,
    pub total_distance: f64,
    /// Facility ids from origin to destination, both inclusive
    pub path: Vec<FacilityId>,
    pub hops: Vec<Hop>,
}

/// One connection traversed by a [`Route`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    pub from: FacilityId,
    pub from_name: String,
    pub to: FacilityId,
    pub to_name: String,
    pub distance: f64,
    pub travel_time: u32,
    pub description: String,
}

impl Route {
    /// Travel time summed over every hop, in minutes
    pub fn total_travel_time(&self) -> u64 {
        self.hops.iter().map(|hop| u64::from(hop.travel_time)).sum()
    }

    pub(crate) fn from_path(
        network: &FacilityNetwork,
        path: &[NodeIndex],
        total_distance: f64,
    ) -> Result<Self, NetworkError> {
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return Err(NetworkError::GraphError {
                message: "cannot build a route from an empty path".to_string(),
            });
        };

        let mut hops = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            let (from, to) = (network.facility_at(pair[0]), network.facility_at(pair[1]));
            let connection = network.connection_between(pair[0], pair[1]).ok_or_else(|| {
                NetworkError::GraphError {
                    message: format!(
                        "route steps from {} to {} without a connection",
                        from.id(),
                        to.id()
                    ),
                }
            })?;

            hops.push(Hop {
                from: from.id(),
                from_name: from.name().to_string(),
                to: to.id(),
                to_name: to.name().to_string(),
                distance: connection.distance(),
                travel_time: connection.travel_time(),
                description: connection.description().to_string(),
            });
        }

        Ok(Self {
            origin: network.facility_at(first).id(),
            destination: network.facility_at(last).id(),
            total_distance,
            path: path
                .iter()
                .map(|&idx| network.facility_at(idx).id())
                .collect(),
            hops,
        })
    }
}

/// Shortest route by distance between two distinct facilities
///
/// The search stops as soon as the destination is settled. Ordinary
/// unreachability is reported as [`NetworkError::Unreachable`].
#[tracing::instrument(skip(network))]
pub fn shortest_route(
    network: &FacilityNetwork,
    from: FacilityId,
    to: FacilityId,
) -> Result<Route, NetworkError> {
    let origin = network.index_of(from)?;
    let destination = network.index_of(to)?;

    if origin == destination {
        return Err(NetworkError::invalid_operation(format!(
            "origin and destination are both facility {from}"
        )));
    }

    let mut search = RelaxationSearch::new(network, origin);
    while let Some(current) = search.next_settled() {
        if current == destination {
            debug!(settled = search.settled_count(), "destination settled");
            break;
        }
        search.relax(current);
    }

    if search.distance_to(destination).is_infinite() {
        debug!(settled = search.settled_count(), "frontier exhausted");
        return Err(NetworkError::Unreachable { from, to });
    }

    search.into_route(destination)
}
