//! Facility command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_network, print_report, save_network};
use crate::config::{FacilityConfig, FacilityOperation};
use crate::error::NetworkError;
use crate::executors::CommandExecutor;

pub struct FacilityExecutor;

impl CommandExecutor for FacilityExecutor {
    type Config = FacilityConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut network = load_network(&config.datasets)?;

        let changed = match config.operation {
            FacilityOperation::List => {
                let facilities: Vec<_> = network.facilities().cloned().collect();
                return print_report(config.format, facilities.as_slice());
            }
            FacilityOperation::Add(facility) => {
                network
                    .add_facility(facility.clone())
                    .wrap_err("Failed to add facility")?;
                eprintln!(
                    "{} Added facility {} ({})",
                    style("✅").green(),
                    style(facility.id()).bold(),
                    facility.name()
                );
                facility
            }
            FacilityOperation::Edit(edit) => {
                let current = network
                    .facility(edit.id)
                    .ok_or(NetworkError::NotFound { id: edit.id })?;
                let updated = edit.apply(current).wrap_err("Failed to edit facility")?;
                network.update_facility(updated.clone())?;
                eprintln!(
                    "{} Updated facility {}",
                    style("✅").green(),
                    style(updated.id()).bold()
                );
                updated
            }
            FacilityOperation::Remove(id) => {
                let removed = network
                    .remove_facility(id)
                    .wrap_err("Failed to remove facility")?;
                eprintln!(
                    "{} Removed facility {} ({}) and its connections",
                    style("🗑").yellow(),
                    style(removed.id()).bold(),
                    removed.name()
                );
                removed
            }
        };

        save_network(&network, &config.datasets)?;
        print_report(config.format, std::slice::from_ref(&changed))
    }
}
