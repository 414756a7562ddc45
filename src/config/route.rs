//! Route command configuration

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;
use crate::graph::FacilityId;

/// Configuration for the route command
#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    pub from: FacilityId,
    pub to: FacilityId,
}

impl RouteConfig {
    pub fn builder() -> RouteConfigBuilder {
        RouteConfigBuilder::new()
    }
}

crate::impl_builder! {
    RouteConfigBuilder => RouteConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_from => from: FacilityId,
        with_to => to: FacilityId,
    }
}
