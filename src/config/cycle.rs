//! Cycle command configuration

use crate::cli::OutputFormat;
use crate::dataset::DatasetPaths;

/// Configuration for the cycle command
#[derive(Debug, Clone)]
pub struct CycleCheckConfig {
    pub datasets: DatasetPaths,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if a cycle is found
    pub error_on_cycle: bool,
}

impl CycleCheckConfig {
    pub fn builder() -> CycleCheckConfigBuilder {
        CycleCheckConfigBuilder::new()
    }
}

crate::impl_builder! {
    CycleCheckConfigBuilder => CycleCheckConfig {
        with_datasets => datasets: DatasetPaths,
        with_format => format: OutputFormat,
        with_error_on_cycle => error_on_cycle: bool,
    }
}
