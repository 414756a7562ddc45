use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, NodeIndexable};
use serde::Serialize;
use tracing::debug;

use super::types::{Connection, Facility, FacilityId};
use crate::error::NetworkError;

/// Owner of the facility set and the directed connections between them
///
/// Facilities live in a petgraph arena keyed by [`NodeIndex`]; a side table
/// maps caller-assigned ids onto arena slots, so ids never need to be small
/// or contiguous. A stable graph keeps every remaining index valid when a
/// facility is removed, and removing a node drops its incident edges, which
/// keeps the store free of dangling connections.
#[derive(Debug, Clone, Default)]
pub struct FacilityNetwork {
    graph: StableDiGraph<Facility, Connection>,
    indices: HashMap<FacilityId, NodeIndex>,
    order: Vec<FacilityId>,
}

/// One row of the relationship export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub facility_id: FacilityId,
    pub facility_name: String,
    /// `None` for a facility without outgoing connections
    pub link: Option<RelationshipLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipLink {
    pub to: FacilityId,
    pub to_name: String,
    pub distance: f64,
    pub travel_time: u32,
    pub description: String,
}

impl FacilityNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from validated records
    ///
    /// All facilities are inserted before any connection, so connection
    /// order within the input does not depend on facility order.
    pub fn from_records(
        facilities: impl IntoIterator<Item = Facility>,
        connections: impl IntoIterator<Item = Connection>,
    ) -> Result<Self, NetworkError> {
        let mut network = Self::new();
        for facility in facilities {
            network.add_facility(facility)?;
        }
        for connection in connections {
            network.add_connection(connection)?;
        }
        Ok(network)
    }

    pub fn add_facility(&mut self, facility: Facility) -> Result<(), NetworkError> {
        let id = facility.id();
        if self.indices.contains_key(&id) {
            return Err(NetworkError::invalid_operation(format!(
                "a facility with ID {id} already exists"
            )));
        }

        let idx = self.graph.add_node(facility);
        self.indices.insert(id, idx);
        self.order.push(id);

        debug!(%id, "facility added");
        Ok(())
    }

    /// Replace the attributes of an existing facility, returning the old
    /// record
    pub fn update_facility(&mut self, facility: Facility) -> Result<Facility, NetworkError> {
        let idx = self.index_of(facility.id())?;
        Ok(std::mem::replace(&mut self.graph[idx], facility))
    }

    /// Remove a facility together with every connection that starts or ends
    /// at it
    pub fn remove_facility(&mut self, id: FacilityId) -> Result<Facility, NetworkError> {
        let idx = self
            .indices
            .remove(&id)
            .ok_or(NetworkError::NotFound { id })?;
        self.order.retain(|&other| other != id);

        let dropped = self.graph.edges(idx).count()
            + self
                .graph
                .edges_directed(idx, petgraph::Incoming)
                .count();

        let facility = self
            .graph
            .remove_node(idx)
            .ok_or_else(|| NetworkError::GraphError {
                message: format!("facility {id} was indexed but missing from the graph"),
            })?;

        debug!(%id, dropped_connections = dropped, "facility removed");
        Ok(facility)
    }

    /// Add a directed connection between two existing, distinct facilities
    pub fn add_connection(&mut self, connection: Connection) -> Result<(), NetworkError> {
        let (from_id, to_id) = (connection.origin(), connection.destination());
        let from = self.index_of(from_id)?;
        let to = self.index_of(to_id)?;

        if from == to {
            return Err(NetworkError::invalid_operation(format!(
                "facility {from_id} cannot be connected to itself"
            )));
        }
        if self.graph.find_edge(from, to).is_some() {
            return Err(NetworkError::invalid_operation(format!(
                "a connection from {from_id} to {to_id} already exists"
            )));
        }

        self.graph.add_edge(from, to, connection);
        debug!(from = %from_id, to = %to_id, "connection added");
        Ok(())
    }

    /// Replace the attributes of an existing connection in place, returning
    /// the old record
    ///
    /// The connection keeps its position in the source's outgoing order.
    pub fn update_connection(&mut self, connection: Connection) -> Result<Connection, NetworkError> {
        let (from_id, to_id) = (connection.origin(), connection.destination());
        let from = self.index_of(from_id)?;
        let to = self.index_of(to_id)?;

        let edge = self
            .graph
            .find_edge(from, to)
            .ok_or(NetworkError::ConnectionNotFound {
                from: from_id,
                to: to_id,
            })?;

        Ok(std::mem::replace(&mut self.graph[edge], connection))
    }

    pub fn remove_connection(
        &mut self,
        from: FacilityId,
        to: FacilityId,
    ) -> Result<Connection, NetworkError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        let edge = self
            .graph
            .find_edge(from_idx, to_idx)
            .ok_or(NetworkError::ConnectionNotFound { from, to })?;

        let connection = self
            .graph
            .remove_edge(edge)
            .ok_or(NetworkError::ConnectionNotFound { from, to })?;

        debug!(%from, %to, "connection removed");
        Ok(connection)
    }

    pub fn contains(&self, id: FacilityId) -> bool {
        self.indices.contains_key(&id)
    }

    pub fn facility(&self, id: FacilityId) -> Option<&Facility> {
        self.indices.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Facilities in insertion order
    pub fn facilities(&self) -> impl Iterator<Item = &Facility> + '_ {
        self.order.iter().filter_map(|&id| self.facility(id))
    }

    pub fn facility_count(&self) -> usize {
        self.order.len()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Outgoing connections of `id` in the order they were added
    pub fn outgoing(&self, id: FacilityId) -> Result<Vec<&Connection>, NetworkError> {
        let idx = self.index_of(id)?;
        Ok(self
            .successors(idx)
            .into_iter()
            .map(|(_, connection)| connection)
            .collect())
    }

    pub fn connection(&self, from: FacilityId, to: FacilityId) -> Option<&Connection> {
        let from = *self.indices.get(&from)?;
        let to = *self.indices.get(&to)?;
        self.connection_between(from, to)
    }

    /// Every connection, grouped by source in facility insertion order
    pub fn connections(&self) -> Vec<&Connection> {
        self.node_indices_in_order()
            .flat_map(|idx| self.successors(idx).into_iter().map(|(_, c)| c))
            .collect()
    }

    /// Rows for the relationship export: one per outgoing connection, or a
    /// single link-less row for an isolated facility
    pub fn relationships(&self) -> Vec<Relationship> {
        let mut rows = Vec::new();

        for idx in self.node_indices_in_order() {
            let facility = &self.graph[idx];
            let successors = self.successors(idx);

            if successors.is_empty() {
                rows.push(Relationship {
                    facility_id: facility.id(),
                    facility_name: facility.name().to_string(),
                    link: None,
                });
                continue;
            }

            for (target, connection) in successors {
                rows.push(Relationship {
                    facility_id: facility.id(),
                    facility_name: facility.name().to_string(),
                    link: Some(RelationshipLink {
                        to: connection.destination(),
                        to_name: self.graph[target].name().to_string(),
                        distance: connection.distance(),
                        travel_time: connection.travel_time(),
                        description: connection.description().to_string(),
                    }),
                });
            }
        }

        rows
    }

    pub(crate) fn index_of(&self, id: FacilityId) -> Result<NodeIndex, NetworkError> {
        self.indices
            .get(&id)
            .copied()
            .ok_or(NetworkError::NotFound { id })
    }

    /// Upper bound on arena slots, for per-call working arrays
    pub(crate) fn node_bound(&self) -> usize {
        NodeIndexable::node_bound(&self.graph)
    }

    pub(crate) fn node_indices_in_order(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.indices.get(id).copied())
    }

    pub(crate) fn facility_at(&self, idx: NodeIndex) -> &Facility {
        &self.graph[idx]
    }

    /// Outgoing edges of `idx` in insertion order
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<(NodeIndex, &Connection)> {
        // petgraph links new edges at the head of the adjacency list
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.target(), edge.weight()))
            .collect();
        edges.reverse();
        edges
    }

    pub(crate) fn connection_between(&self, from: NodeIndex, to: NodeIndex) -> Option<&Connection> {
        self.graph.find_edge(from, to).map(|edge| &self.graph[edge])
    }
}
