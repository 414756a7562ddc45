//! Matrix command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_network, print_report};
use crate::config::MatrixConfig;
use crate::executors::CommandExecutor;
use crate::routing::all_pairs;

pub struct MatrixExecutor;

impl CommandExecutor for MatrixExecutor {
    type Config = MatrixConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        eprintln!(
            "{} Computing distances between all {} facilities...\n",
            style("📐").cyan(),
            network.facility_count()
        );
        let matrix = all_pairs(&network);

        match config.pair {
            Some((from, to)) => {
                let route = matrix
                    .route(&network, from, to)
                    .wrap_err("Failed to reconstruct the route")?;
                print_report(config.format, &route)
            }
            None => print_report(config.format, &matrix),
        }
    }
}
