//! Traverse command configuration

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;
use crate::graph::FacilityId;

#[derive(Debug, Clone)]
pub struct TraverseConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    /// Facility the breadth-first walk starts from
    pub origin: FacilityId,
}

impl TraverseConfig {
    pub fn builder() -> TraverseConfigBuilder {
        TraverseConfigBuilder::new()
    }
}

crate::impl_builder! {
    TraverseConfigBuilder => TraverseConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_origin => origin: FacilityId,
    }
}
