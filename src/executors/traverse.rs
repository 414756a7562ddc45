//! Traverse command executor

use miette::{Result, WrapErr};

use super::{load_network, print_report};
use crate::config::TraverseConfig;
use crate::executors::CommandExecutor;
use crate::traversal::breadth_first;

pub struct TraverseExecutor;

impl CommandExecutor for TraverseExecutor {
    type Config = TraverseConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        let traversal = breadth_first(&network, config.origin)
            .wrap_err("Failed to traverse the network")?;

        print_report(config.format, &traversal)
    }
}
