//! Command executors that handle the actual logic for each command

pub mod connection;
pub mod cycle;
pub mod facility;
pub mod matrix;
pub mod nearest;
pub mod relationships;
pub mod route;
pub mod spanning_tree;
pub mod traverse;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::dataset::{self, DatasetPaths};
use crate::graph::FacilityNetwork;
use crate::reports::{self, HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the network named by `paths`, announcing it on stderr
pub(crate) fn load_network(paths: &DatasetPaths) -> Result<FacilityNetwork> {
    eprintln!(
        "{} Loading network from {} and {}",
        style("🏥").cyan(),
        style(paths.facilities.display()).bold(),
        style(paths.connections.display()).bold()
    );

    let network = dataset::load_network(paths).wrap_err("Failed to load the network datasets")?;

    eprintln!(
        "  {} {} facilities, {} connections\n",
        style("→").dim(),
        network.facility_count(),
        network.connection_count()
    );
    Ok(network)
}

/// Write the network back to its datasets
pub(crate) fn save_network(network: &FacilityNetwork, paths: &DatasetPaths) -> Result<()> {
    dataset::save_network(network, paths).wrap_err("Failed to save the network datasets")?;
    eprintln!("{} Datasets updated", style("💾").green());
    Ok(())
}

/// Render `data` in the requested format and print it to stdout
pub(crate) fn print_report<T: ?Sized>(format: OutputFormat, data: &T) -> Result<()>
where
    HumanReportGenerator: ReportGenerator<T>,
    JsonReportGenerator: ReportGenerator<T>,
{
    let report = reports::render(format, data)
        .into_diagnostic()
        .wrap_err("Failed to generate report")?;
    print!("{report}");
    Ok(())
}
