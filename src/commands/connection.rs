//! Connection command implementation

use miette::{Result, WrapErr};

use crate::cli::{Commands, ConnectionAction};
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{ConnectionConfig, ConnectionEdit, ConnectionOperation};
use crate::error::NetworkError;
use crate::graph::{Connection, FacilityId};

impl FromCommand for ConnectionConfig {
    fn from_command(command: Commands) -> Result<Self, NetworkError> {
        match command {
            Commands::Connection {
                action,
                datasets,
                format,
            } => ConnectionConfig::builder()
                .with_datasets(datasets.settings()?.datasets)
                .with_format(format.format)
                .with_operation(operation(action)?)
                .build(),
            _ => Err(NetworkError::ConfigurationError {
                message: "Invalid command type for ConnectionConfig".to_string(),
            }),
        }
    }
}

fn operation(action: ConnectionAction) -> Result<ConnectionOperation, NetworkError> {
    Ok(match action {
        ConnectionAction::List { from } => ConnectionOperation::List {
            from: from.map(FacilityId::new),
        },
        ConnectionAction::Add {
            from,
            to,
            distance,
            time,
            description,
        } => ConnectionOperation::Add(
            Connection::builder()
                .with_from(FacilityId::new(from))
                .with_to(FacilityId::new(to))
                .with_distance(distance)
                .with_travel_time(time)
                .with_description(&description)
                .build()?,
        ),
        ConnectionAction::Edit {
            from,
            to,
            distance,
            time,
            description,
        } => ConnectionOperation::Edit(ConnectionEdit {
            from: FacilityId::new(from),
            to: FacilityId::new(to),
            distance,
            travel_time: time,
            description,
        }),
        ConnectionAction::Remove { from, to } => ConnectionOperation::Remove {
            from: FacilityId::new(from),
            to: FacilityId::new(to),
        },
    })
}

crate::impl_try_from_command!(ConnectionConfig);

/// Execute the connection command
pub fn execute_connection_command(command: Commands) -> Result<()> {
    let config = ConnectionConfig::from_command(command)
        .wrap_err("Failed to parse connection command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::connection::ConnectionExecutor;
    ConnectionExecutor::execute(config)
}
