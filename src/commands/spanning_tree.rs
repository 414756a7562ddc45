//! Spanning tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpanningTreeConfig;
use crate::error::NetworkError;
use crate::graph::FacilityId;

impl FromCommand for SpanningTreeConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::SpanningTree {
                root,
                datasets,
                format,
            } => SpanningTreeConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_root(FacilityId::new(root))
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for SpanningTreeConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpanningTreeConfig);

/// Execute the spanning-tree command
pub fn execute_spanning_tree_command(command: Commands) -> Result<()> {
    let config = SpanningTreeConfig::from_command(command)
        .wrap_err("Failed to parse spanning-tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spanning_tree::SpanningTreeExecutor;
    SpanningTreeExecutor::execute(config)
}
