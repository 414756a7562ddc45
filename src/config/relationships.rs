//! Relationships command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;

#[derive(Debug, Clone)]
pub struct RelationshipsConfig {
    pub datasets: DatasetPaths,
    pub format: OutputFormat,
    /// CSV file the relationship table is written to
    pub output: PathBuf,
}

impl RelationshipsConfig {
    pub fn builder() -> RelationshipsConfigBuilder {
        RelationshipsConfigBuilder::new()
    }
}

crate::impl_builder! {
    RelationshipsConfigBuilder => RelationshipsConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_output => output: PathBuf,
    }
}
