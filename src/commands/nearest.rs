//! Nearest command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::NearestConfig;
use crate::error::NetworkError;
use crate::graph::FacilityId;

impl FromCommand for NearestConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Nearest {
                from,
                min_capacity,
                datasets,
                format,
            } => NearestConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_origin(FacilityId::new(from))
                .with_min_capacity(min_capacity)
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for NearestConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(NearestConfig);

/// Execute the nearest command
pub fn execute_nearest_command(command: Commands) -> Result<()> {
    let config = NearestConfig::from_command(command)
        .wrap_err("Failed to parse nearest command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::nearest::NearestExecutor;
    NearestExecutor::execute(config)
}
