//! Route command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RouteConfig;
use crate::error::NetworkError;
use crate::graph::FacilityId;

impl FromCommand for RouteConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Route {
                from,
                to,
                datasets,
                format,
            } => RouteConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_from(FacilityId::new(from))
                .with_to(FacilityId::new(to))
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for RouteConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RouteConfig);

/// Execute the route command
pub fn execute_route_command(command: Commands) -> Result<()> {
    let config = RouteConfig::from_command(command)
        .wrap_err("Failed to parse route command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::route::RouteExecutor;
    RouteExecutor::execute(config)
}
