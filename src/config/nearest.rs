//! Nearest command configuration

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;
use crate::graph::FacilityId;

/// Configuration for the capacity-constrained search
#[derive(Debug, Clone)]
pub struct NearestConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    pub origin: FacilityId,
    /// Smallest acceptable capacity (greater than 0)
    pub min_capacity: u32,
}

impl NearestConfig {
    pub fn builder() -> NearestConfigBuilder {
        NearestConfigBuilder::new()
    }
}

crate::impl_builder! {
    NearestConfigBuilder => NearestConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_origin => origin: FacilityId,
        with_min_capacity => min_capacity: u32,
    }
}
