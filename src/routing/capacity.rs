use serde::Serialize;
use tracing::debug;

use super::frontier::RelaxationSearch;
use super::shortest_path::Route;
use crate::error::NetworkError;
use crate::graph::{Facility, FacilityId, FacilityNetwork};

/// Outcome of a nearest-facility search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NearestFacility {
    /// The origin itself meets the threshold; no search was run
    Origin { facility: Facility },
    /// The closest other facility that meets the threshold
    Routed { facility: Facility, route: Route },
}

impl NearestFacility {
    pub fn facility(&self) -> &Facility {
        match self {
            Self::Origin { facility } | Self::Routed { facility, .. } => facility,
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Self::Origin { .. } => 0.0,
            Self::Routed { route, .. } => route.total_distance,
        }
    }
}

/// Find the closest facility reachable from `origin` whose capacity is at
/// least `min_capacity`
///
/// The search stops at the first settled facility, other than the origin,
/// that qualifies. Settled order is distance order, so that facility is at
/// minimum distance among all reachable qualifying ones.
#[tracing::instrument(skip(network))]
pub fn nearest_with_capacity(
    network: &FacilityNetwork,
    origin: FacilityId,
    min_capacity: u32,
) -> Result<NearestFacility, NetworkError> {
    if min_capacity == 0 {
        return Err(NetworkError::invalid_operation(
            "minimum capacity must be greater than 0",
        ));
    }

    let start = network.index_of(origin)?;
    let here = network.facility_at(start);
    if here.capacity() >= min_capacity {
        debug!(capacity = here.capacity(), "origin meets the threshold");
        return Ok(NearestFacility::Origin {
            facility: here.clone(),
        });
    }

    let mut search = RelaxationSearch::new(network, start);
    while let Some(current) = search.next_settled() {
        let candidate = network.facility_at(current);
        if current != start && candidate.capacity() >= min_capacity {
            debug!(
                found = %candidate.id(),
                settled = search.settled_count(),
                "qualifying facility settled"
            );
            let facility = candidate.clone();
            let route = search.into_route(current)?;
            return Ok(NearestFacility::Routed { facility, route });
        }
        search.relax(current);
    }

    debug!(settled = search.settled_count(), "frontier exhausted");
    Err(NetworkError::NoMatch { min_capacity })
}
