//! Connection command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_network, print_report, save_network};
use crate::config::{ConnectionConfig, ConnectionOperation};
use crate::error::NetworkError;
use crate::executors::CommandExecutor;

pub struct ConnectionExecutor;

impl CommandExecutor for ConnectionExecutor {
    type Config = ConnectionConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut network = load_network(&config.datasets)?;

        let changed = match config.operation {
            ConnectionOperation::List { from } => {
                let connections: Vec<_> = match from {
                    Some(id) => network.outgoing(id)?.into_iter().cloned().collect(),
                    None => network.connections().into_iter().cloned().collect(),
                };
                return print_report(config.format, connections.as_slice());
            }
            ConnectionOperation::Add(connection) => {
                network
                    .add_connection(connection.clone())
                    .wrap_err("Failed to add connection")?;
                eprintln!(
                    "{} Added connection {} → {}",
                    style("✅").green(),
                    style(connection.origin()).bold(),
                    style(connection.destination()).bold()
                );
                connection
            }
            ConnectionOperation::Edit(edit) => {
                let current =
                    network
                        .connection(edit.from, edit.to)
                        .ok_or(NetworkError::ConnectionNotFound {
                            from: edit.from,
                            to: edit.to,
                        })?;
                let updated = edit.apply(current).wrap_err("Failed to edit connection")?;
                network.update_connection(updated.clone())?;
                eprintln!(
                    "{} Updated connection {} → {}",
                    style("✅").green(),
                    style(updated.origin()).bold(),
                    style(updated.destination()).bold()
                );
                updated
            }
            ConnectionOperation::Remove { from, to } => {
                let removed = network
                    .remove_connection(from, to)
                    .wrap_err("Failed to remove connection")?;
                eprintln!(
                    "{} Removed connection {} → {}",
                    style("🗑").yellow(),
                    style(from).bold(),
                    style(to).bold()
                );
                removed
            }
        };

        save_network(&network, &config.datasets)?;
        print_report(config.format, std::slice::from_ref(&changed))
    }
}
