//! Connection command configuration

use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::dataset::DatasetPaths;
use crate::error::NetworkError;
use crate::graph::{Connection, FacilityId};

#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    pub operation: ConnectionOperation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionOperation {
    /// List every connection, or only those leaving `from`
    List { from: Option<FacilityId> },
    Add(Connection),
    Edit(ConnectionEdit),
    Remove { from: FacilityId, to: FacilityId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionEdit {
    pub from: FacilityId,
    pub to: FacilityId,
    pub distance: Option<f64>,
    pub travel_time: Option<u32>,
    pub description: Option<String>,
}

impl ConnectionEdit {
    pub fn new(from: FacilityId, to: FacilityId) -> Self {
        Self {
            from,
            to,
            distance: None,
            travel_time: None,
            description: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_none() && self.travel_time.is_none() && self.description.is_none()
    }

    pub fn apply(&self, current: &Connection) -> Result<Connection, NetworkError> {
        if self.is_empty() {
            return Err(NetworkError::invalid_operation(format!(
                "no changes given for connection {} -> {}",
                self.from, self.to
            )));
        }

        let mut builder = current.to_builder();
        if let Some(distance) = self.distance {
            builder = builder.with_distance(distance);
        }
        if let Some(travel_time) = self.travel_time {
            builder = builder.with_travel_time(travel_time);
        }
        if let Some(description) = &self.description {
            builder = builder.with_description(description);
        }
        builder.build()
    }
}

impl ConnectionConfig {
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::new()
    }
}

crate::impl_builder! {
    ConnectionConfigBuilder => ConnectionConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_operation => operation: ConnectionOperation,
    }
}
