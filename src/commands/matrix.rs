//! Matrix command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::MatrixConfig;
use crate::error::NetworkError;
use crate::graph::FacilityId;

impl FromCommand for MatrixConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Matrix {
                from,
                to,
                datasets,
                format,
            } => MatrixConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_pair(
                    from.zip(to)
                        .map(|(from, to)| (FacilityId::new(from), FacilityId::new(to))),
                )
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for MatrixConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(MatrixConfig);

/// Execute the matrix command
pub fn execute_matrix_command(command: Commands) -> Result<()> {
    let config = MatrixConfig::from_command(command)
        .wrap_err("Failed to parse matrix command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::matrix::MatrixExecutor;
    MatrixExecutor::execute(config)
}
