//! Route command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_network, print_report};
use crate::config::RouteConfig;
use crate::executors::CommandExecutor;
use crate::routing::shortest_route;

pub struct RouteExecutor;

impl CommandExecutor for RouteExecutor {
    type Config = RouteConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        eprintln!(
            "{} Searching for the shortest route from {} to {}...\n",
            style("🧭").cyan(),
            style(config.from).bold(),
            style(config.to).bold()
        );

        let route = shortest_route(&network, config.from, config.to)
            .wrap_err("Failed to find a route")?;

        print_report(config.format, &route)
    }
}
