//! Facility command configuration

use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::dataset::DatasetPaths;
use crate::error::NetworkError;
use crate::graph::{Facility, FacilityId};

#[derive(Debug, Clone)]
pub struct FacilityConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    pub operation: FacilityOperation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FacilityOperation {
    List,
    Add(Facility),
    Edit(FacilityEdit),
    Remove(FacilityId),
}

/// Attribute changes for an existing facility; unset fields keep their value
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityEdit {
    pub id: FacilityId,
    pub name: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: Option<u32>,
}

impl FacilityEdit {
    pub fn new(id: FacilityId) -> Self {
        Self {
            id,
            name: None,
            region: None,
            latitude: None,
            longitude: None,
            capacity: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.region.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.capacity.is_none()
    }

    /// Produce the edited record, validated like a new one
    pub fn apply(&self, current: &Facility) -> Result<Facility, NetworkError> {
        if self.is_empty() {
            return Err(NetworkError::invalid_operation(format!(
                "no changes given for facility {}",
                self.id
            )));
        }

        let mut builder = current.to_builder();
        if let Some(name) = &self.name {
            builder = builder.with_name(name);
        }
        if let Some(region) = &self.region {
            builder = builder.with_region(region);
        }
        if let Some(latitude) = self.latitude {
            builder = builder.with_latitude(latitude);
        }
        if let Some(longitude) = self.longitude {
            builder = builder.with_longitude(longitude);
        }
        if let Some(capacity) = self.capacity {
            builder = builder.with_capacity(capacity);
        }
        builder.build()
    }
}

impl FacilityConfig {
    pub fn builder() -> FacilityConfigBuilder {
        FacilityConfigBuilder::new()
    }
}

crate::impl_builder! {
    FacilityConfigBuilder => FacilityConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_operation => operation: FacilityOperation,
    }
}
