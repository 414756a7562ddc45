//! Cycle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CycleCheckConfig;
use crate::error::NetworkError;

impl FromCommand for CycleCheckConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Cycle {
                error_on_cycle,
                datasets,
                format,
            } => CycleCheckConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_error_on_cycle(error_on_cycle)
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for CycleCheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CycleCheckConfig);

/// Execute the cycle command for detecting referral loops
pub fn execute_cycle_command(command: Commands) -> Result<()> {
    let config = CycleCheckConfig::from_command(command)
        .wrap_err("Failed to parse cycle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::cycle::CycleExecutor;
    CycleExecutor::execute(config)
}
