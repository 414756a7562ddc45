//! Traverse command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraverseConfig;
use crate::error::NetworkError;
use crate::graph::FacilityId;

impl FromCommand for TraverseConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Traverse {
                from,
                datasets,
                format,
            } => TraverseConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_origin(FacilityId::new(from))
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for TraverseConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraverseConfig);

/// Execute the traverse command
pub fn execute_traverse_command(command: Commands) -> Result<()> {
    let config = TraverseConfig::from_command(command)
        .wrap_err("Failed to parse traverse command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::traverse::TraverseExecutor;
    TraverseExecutor::execute(config)
}
