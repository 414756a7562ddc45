//! Spanning tree command executor

use miette::{Result, WrapErr};

use super::{load_network, print_report};
use crate::config::SpanningTreeConfig;
use crate::executors::CommandExecutor;
use crate::spanning_tree::minimum_spanning_tree;

pub struct SpanningTreeExecutor;

impl CommandExecutor for SpanningTreeExecutor {
    type Config = SpanningTreeConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        let tree = minimum_spanning_tree(&network, config.root)
            .wrap_err("Failed to build the spanning tree")?;

        print_report(config.format, &tree)
    }
}
