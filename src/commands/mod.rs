//! Command implementations for the health-network CLI
//!
//! Each command turns its CLI arguments into a config and hands it to the
//! matching executor:
//! - facility / connection: list and edit the network
//! - relationships: print and export the relationship table
//! - route, traverse, matrix: path queries
//! - cycle: referral loop detection
//! - spanning-tree: spanning tree from a root
//! - nearest: closest facility with enough capacity

pub mod connection;
pub mod cycle;
pub mod facility;
pub mod matrix;
pub mod nearest;
pub mod relationships;
pub mod route;
pub mod spanning_tree;
pub mod traverse;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Facility { .. } => facility::execute_facility_command(command),
        Commands::Connection { .. } => connection::execute_connection_command(command),
        Commands::Relationships { .. } => relationships::execute_relationships_command(command),
        Commands::Route { .. } => route::execute_route_command(command),
        Commands::Traverse { .. } => traverse::execute_traverse_command(command),
        Commands::Cycle { .. } => cycle::execute_cycle_command(command),
        Commands::Matrix { .. } => matrix::execute_matrix_command(command),
        Commands::SpanningTree { .. } => spanning_tree::execute_spanning_tree_command(command),
        Commands::Nearest { .. } => nearest::execute_nearest_command(command),
    }
}
