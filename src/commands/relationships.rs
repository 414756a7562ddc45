//! Relationships command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RelationshipsConfig;
use crate::error::NetworkError;

impl FromCommand for RelationshipsConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Relationships {
                output,
                datasets,
                format,
            } => {
                let settings = datasets.settings()?;
                RelationshipsConfig::builder()
                    .with_output(output.unwrap_or(settings.export.relationships))
                    .with_datasets(settings.datasets)
                    .with_format(format.format)
                    .build()
            }
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for RelationshipsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RelationshipsConfig);

/// Execute the relationships command
pub fn execute_relationships_command(command: Commands) -> Result<()> {
    let config = RelationshipsConfig::from_command(command)
        .wrap_err("Failed to parse relationships command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::relationships::RelationshipsExecutor;
    RelationshipsExecutor::execute(config)
}
