//! Spanning tree command configuration

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;
use crate::graph::FacilityId;

#[derive(Debug, Clone)]
pub struct SpanningTreeConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    pub root: FacilityId,
}

impl SpanningTreeConfig {
    pub fn builder() -> SpanningTreeConfigBuilder {
        SpanningTreeConfigBuilder::new()
    }
}

crate::impl_builder! {
    SpanningTreeConfigBuilder => SpanningTreeConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_root => root: FacilityId,
    }
}
