//! Nearest command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_network, print_report};
use crate::config::NearestConfig;
use crate::executors::CommandExecutor;
use crate::routing::nearest_with_capacity;

pub struct NearestExecutor;

impl CommandExecutor for NearestExecutor {
    type Config = NearestConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        eprintln!(
            "{} Looking for capacity of at least {} near {}...\n",
            style("📍").cyan(),
            style(config.min_capacity).bold(),
            style(config.origin).bold()
        );

        let nearest = nearest_with_capacity(&network, config.origin, config.min_capacity)
            .wrap_err("Failed to find a facility")?;

        print_report(config.format, &nearest)
    }
}
