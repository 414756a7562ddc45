//! Matrix command configuration

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;
use crate::graph::FacilityId;

#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    /// When set, report the route for this (from, to) pair instead of the
    /// whole matrix
    pub pair: Option<(FacilityId, FacilityId)>,
}

impl MatrixConfig {
    pub fn builder() -> MatrixConfigBuilder {
        MatrixConfigBuilder::new()
    }
}

crate::impl_builder! {
    MatrixConfigBuilder => MatrixConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_pair => pair: Option<(FacilityId, FacilityId)>,
    }
}
