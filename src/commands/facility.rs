//! Facility command implementation

use miette::{Result, WrapErr};

use crate::cli::{Commands, FacilityAction};
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{FacilityConfig, FacilityEdit, FacilityOperation};
use crate::error::NetworkError;
use crate::graph::{Facility, FacilityId};

impl FromCommand for FacilityConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Facility {
                action,
                datasets,
                format,
            } => FacilityConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_operation(operation(action)?)
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for FacilityConfig".to_string(),
            }),
        }
    }
}

fn operation(action: FacilityAction) -> Result<FacilityOperation, NetworkError> {
    Ok(match action {
        FacilityAction::List => FacilityOperation::List,
        FacilityAction::Add {
            id,
            name,
            region,
            latitude,
            longitude,
            capacity,
        } => FacilityOperation::Add(
            Facility::builder()
                .with_id(FacilityId::new(id))
                .with_name(&name)
                .with_region(&region)
                .with_coordinates(latitude, longitude)
                .with_capacity(capacity)
                .build()?,
        ),
        FacilityAction::Edit {
            id,
            name,
            region,
            latitude,
            longitude,
            capacity,
        } => FacilityOperation::Edit(FacilityEdit {
            id: FacilityId::new(id),
            name,
            region,
            latitude,
            longitude,
            capacity,
        }),
        FacilityAction::Remove { id } => FacilityOperation::Remove(FacilityId::new(id)),
    })
}

crate::impl_try_from_command!(FacilityConfig);

/// Execute the facility command
pub fn execute_facility_command(command: Commands) -> Result<()> {
    let config = FacilityConfig::from_command(command)
        .wrap_err("Failed to parse facility command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::facility::FacilityExecutor;
    FacilityExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn config(args: &[&str]) -> Result<FacilityConfig, NetworkError> {
        let cli = Cli::try_parse_from(args).unwrap();
        FacilityConfig::try_from(cli.command)
    }

    #[test]
    fn test_add_builds_validated_record() {
        let config = config(&[
            "health-network",
            "facility",
            "add",
            "7",
            "--name",
            "Riverside",
            "--district",
            "South",
            "--latitude",
            "-2.5",
            "--longitude",
            "29.9",
            "--capacity",
            "25",
            "--facilities",
            "/nonexistent/centers.csv",
        ])
        .unwrap();

        match config.operation {
            FacilityOperation::Add(facility) => {
                assert_eq!(facility.id(), FacilityId::new(7));
                assert_eq!(facility.region(), "South");
            }
            other => panic!("Expected add, got {other:?}"),
        }
        assert_eq!(
            config.datasets.facilities,
            std::path::PathBuf::from("/nonexistent/centers.csv")
        );
    }

    #[test]
    fn test_add_rejects_zero_capacity() {
        let err = config(&[
            "health-network",
            "facility",
            "add",
            "7",
            "--name",
            "Riverside",
            "--region",
            "South",
            "--latitude",
            "0",
            "--longitude",
            "0",
            "--capacity",
            "0",
        ])
        .unwrap_err();

        assert!(matches!(err, NetworkError::InvalidRecord { .. }));
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli = Cli::try_parse_from(["health-network", "cycle"]).unwrap();

        assert!(FacilityConfig::try_from(cli.command).is_err());
    }
}
