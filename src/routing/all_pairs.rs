use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::shortest_path::Route;
use crate::error::NetworkError;
use crate::graph::{FacilityId, FacilityNetwork};

/// Dense all-pairs distance table with a next-hop matrix for paths
///
/// Rows and columns follow facility insertion order. Unreachable pairs hold
/// `f64::INFINITY` (serialized as `null`).
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMatrix {
    ids: Vec<FacilityId>,
    distances: Vec<Vec<f64>>,
    #[serde(skip)]
    next: Vec<Vec<Option<usize>>>,
    #[serde(skip)]
    positions: HashMap<FacilityId, usize>,
}

/// Run Floyd–Warshall over the current network
///
/// Cubic in the number of facilities.
#[tracing::instrument(skip(network), fields(facilities = network.facility_count()))]
pub fn all_pairs(network: &FacilityNetwork) -> DistanceMatrix {
    let order: Vec<_> = network.node_indices_in_order().collect();
    let n = order.len();

    let mut slot = vec![None; network.node_bound()];
    for (position, idx) in order.iter().enumerate() {
        slot[idx.index()] = Some(position);
    }

    let mut distances = vec![vec![f64::INFINITY; n]; n];
    let mut next = vec![vec![None; n]; n];

    for (i, &idx) in order.iter().enumerate() {
        distances[i][i] = 0.0;
        next[i][i] = Some(i);
        for (target, connection) in network.successors(idx) {
            if let Some(j) = slot[target.index()] {
                distances[i][j] = connection.distance();
                next[i][j] = Some(j);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if distances[i][k].is_infinite() {
                continue;
            }
            for j in 0..n {
                if distances[k][j].is_infinite() {
                    continue;
                }
                let through = distances[i][k] + distances[k][j];
                if through < distances[i][j] {
                    distances[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    let ids: Vec<_> = order
        .iter()
        .map(|&idx| network.facility_at(idx).id())
        .collect();
    let positions = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    debug!(size = n, "distance matrix computed");

    DistanceMatrix {
        ids,
        distances,
        next,
        positions,
    }
}

impl DistanceMatrix {
    /// Facility ids labelling rows and columns
    pub fn ids(&self) -> &[FacilityId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Rows of the matrix paired with their source facility
    pub fn rows(&self) -> impl Iterator<Item = (FacilityId, &[f64])> + '_ {
        self.ids
            .iter()
            .copied()
            .zip(self.distances.iter().map(Vec::as_slice))
    }

    /// Raw matrix entry; infinite when `to` is unreachable from `from`
    pub fn distance(&self, from: FacilityId, to: FacilityId) -> Result<f64, NetworkError> {
        let (i, j) = (self.position(from)?, self.position(to)?);
        Ok(self.distances[i][j])
    }

    /// Follow next-hop pointers from `from` to `to`
    pub fn path(&self, from: FacilityId, to: FacilityId) -> Result<Vec<FacilityId>, NetworkError> {
        let (i, j) = (self.position(from)?, self.position(to)?);
        if self.distances[i][j].is_infinite() {
            return Err(NetworkError::Unreachable { from, to });
        }

        let mut path = vec![self.ids[i]];
        let mut current = i;
        while current != j {
            if path.len() > self.len() {
                return Err(NetworkError::GraphError {
                    message: format!("next-hop chain from {from} to {to} does not terminate"),
                });
            }
            current = self.next[current][j].ok_or_else(|| NetworkError::GraphError {
                message: format!("missing next hop towards {to}"),
            })?;
            path.push(self.ids[current]);
        }

        Ok(path)
    }

    /// Reconstruct a path and attach connection details from `network`
    ///
    /// `network` must be the one the matrix was computed from.
    pub fn route(
        &self,
        network: &FacilityNetwork,
        from: FacilityId,
        to: FacilityId,
    ) -> Result<Route, NetworkError> {
        if from == to {
            return Err(NetworkError::invalid_operation(format!(
                "origin and destination are both facility {from}"
            )));
        }

        let path = self.path(from, to)?;
        let indices = path
            .iter()
            .map(|&id| network.index_of(id))
            .collect::<Result<Vec<_>, _>>()?;

        Route::from_path(network, &indices, self.distance(from, to)?)
    }

    fn position(&self, id: FacilityId) -> Result<usize, NetworkError> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(NetworkError::NotFound { id })
    }
}
