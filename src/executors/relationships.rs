//! Relationships command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_network, print_report};
use crate::config::RelationshipsConfig;
use crate::dataset::export_relationships;
use crate::executors::CommandExecutor;

pub struct RelationshipsExecutor;

impl CommandExecutor for RelationshipsExecutor {
    type Config = RelationshipsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        print_report(config.format, network.relationships().as_slice())?;

        let rows = export_relationships(&network, &config.output)
            .wrap_err("Failed to write the relationship table")?;
        eprintln!(
            "\n{} Wrote {} rows to {}",
            style("📄").green(),
            rows,
            style(config.output.display()).bold()
        );

        Ok(())
    }
}
