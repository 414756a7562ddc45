//! Cycle command executor

use std::io::Write;

use console::style;
use miette::Result;

use super::{load_network, print_report};
use crate::config::CycleCheckConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;

pub struct CycleExecutor;

impl CommandExecutor for CycleExecutor {
    type Config = CycleCheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let network = load_network(&config.datasets)?;

        eprintln!("{} Checking for referral cycles...", style("🔍").cyan());

        let mut detector = CycleDetector::new();
        detector.detect_cycle(&network);

        print_report(config.format, &detector)?;

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycle && detector.has_cycle() {
            let _ = std::io::stdout().flush();
            std::process::exit(1);
        }

        Ok(())
    }
}
