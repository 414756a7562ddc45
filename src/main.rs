use miette::Result;

/// Main entry point for the health-network CLI
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reports
    miette::set_panic_hook();

    health_network::run()
}
