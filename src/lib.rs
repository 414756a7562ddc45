//! # Health Network - Route and Audit Networks of Health Facilities
//!
//! Health Network keeps a directed, weighted network of health facilities and
//! answers questions about it: shortest routes, breadth-first reachability,
//! referral cycles, all-pairs distances, spanning trees and the nearest
//! facility with enough capacity.
//!
//! ## Main Components
//!
//! - **Graph**: the [`FacilityNetwork`](graph::FacilityNetwork) store and its
//!   record types
//! - **Routing**: Dijkstra, Floyd–Warshall and the capacity-constrained
//!   search
//! - **Traversal**, **Detector**, **Spanning tree**: the remaining analyses
//! - **Dataset**: CSV persistence for facilities, connections and the
//!   relationship export
//! - **Reports**: human-readable and JSON rendering of every result
//!
//! ## Usage
//!
//! ### Example: Routing Between Facilities
//!
//! ```
//! use health_network::common::ConfigBuilder;
//! use health_network::graph::{Connection, Facility, FacilityId, FacilityNetwork};
//! use health_network::routing::{nearest_with_capacity, shortest_route};
//!
//! # fn main() -> miette::Result<()> {
//! let mut network = FacilityNetwork::new();
//! for (id, name, capacity) in [(1, "Central", 20), (2, "Hillside", 60), (3, "Lakeside", 90)] {
//!     network.add_facility(
//!         Facility::builder()
//!             .with_id(FacilityId::new(id))
//!             .with_name(name)
//!             .with_region("North")
//!             .with_coordinates(-1.94, 30.06)
//!             .with_capacity(capacity)
//!             .build()?,
//!     )?;
//! }
//! for (from, to, km) in [(1, 2, 10.0), (2, 3, 5.0), (1, 3, 20.0)] {
//!     network.add_connection(
//!         Connection::builder()
//!             .with_from(FacilityId::new(from))
//!             .with_to(FacilityId::new(to))
//!             .with_distance(km)
//!             .with_travel_time(15)
//!             .build()?,
//!     )?;
//! }
//!
//! let route = shortest_route(&network, FacilityId::new(1), FacilityId::new(3))?;
//! assert_eq!(route.total_distance, 15.0);
//!
//! let nearest = nearest_with_capacity(&network, FacilityId::new(1), 50)?;
//! assert_eq!(nearest.facility().name(), "Hillside");
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Working With the Datasets
//!
//! ```no_run
//! use health_network::dataset::{DatasetPaths, export_relationships, load_network};
//! use health_network::detector::CycleDetector;
//! use health_network::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let network = load_network(&DatasetPaths::default())?;
//!
//! let mut detector = CycleDetector::new();
//! if detector.detect_cycle(&network) {
//!     print!("{}", HumanReportGenerator::new().generate_report(&detector)?);
//! }
//!
//! let rows = export_relationships(&network, "relationship_table.csv".as_ref())?;
//! println!("exported {rows} rows");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod dataset;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod logging;
pub mod reports;
pub mod routing;
pub mod spanning_tree;
pub mod traversal;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json)?;

    execute_command(cli.command)
}
