use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{DatasetArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "health-network",
    about = "🏥 Route, traverse and audit a network of health facilities",
    long_about = "health-network keeps a directed, weighted network of health facilities in two \
                  CSV datasets and answers questions about it: shortest routes, reachability, \
                  referral loops, all-pairs distances, spanning trees and the nearest facility \
                  with enough capacity.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true, env = "HEALTH_NETWORK_VERBOSE")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error) or a full filter directive
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, add, edit or remove facilities
    ///
    /// Removing a facility also removes every connection that starts or ends
    /// at it. Changes are written back to the datasets.
    Facility {
        #[command(subcommand)]
        action: FacilityAction,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List, add, edit or remove directed connections
    Connection {
        #[command(subcommand)]
        action: ConnectionAction,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show every facility with its outgoing connections and export the table
    #[command(
        long_about = "Print one row per outgoing connection, or a single row marked None for an \
                      isolated facility, and write the same table as CSV. The export path \
                      defaults to the [export] relationships setting."
    )]
    Relationships {
        /// Where to write the CSV table
        #[arg(short, long, value_name = "PATH", env = "HEALTH_NETWORK_RELATIONSHIPS")]
        output: Option<PathBuf>,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Find the shortest route between two facilities
    Route {
        /// Origin facility ID
        #[arg(value_name = "FROM")]
        from: i64,

        /// Destination facility ID
        #[arg(value_name = "TO")]
        to: i64,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List the facilities reachable from an origin, breadth first
    Traverse {
        /// Origin facility ID
        #[arg(value_name = "FROM")]
        from: i64,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Check the network for a directed cycle
    Cycle {
        /// Exit with error code if a cycle is found
        #[arg(long, env = "HEALTH_NETWORK_ERROR_ON_CYCLE")]
        error_on_cycle: bool,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Compute shortest distances between every pair of facilities
    #[command(
        long_about = "Run an all-pairs shortest path computation and print the full distance \
                      matrix. With --from and --to, print the reconstructed route for that pair \
                      instead."
    )]
    Matrix {
        /// Origin facility ID for a single route lookup
        #[arg(long, requires = "to", allow_negative_numbers = true)]
        from: Option<i64>,

        /// Destination facility ID for a single route lookup
        #[arg(long, requires = "from", allow_negative_numbers = true)]
        to: Option<i64>,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Build a minimum spanning tree from a root facility
    SpanningTree {
        /// Root facility ID
        #[arg(value_name = "ROOT")]
        root: i64,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Find the closest facility with at least the given capacity
    Nearest {
        /// Origin facility ID
        #[arg(value_name = "FROM")]
        from: i64,

        /// Minimum capacity the facility must offer
        #[arg(short = 'c', long, value_name = "N")]
        min_capacity: u32,

        #[command(flatten)]
        datasets: DatasetArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FacilityAction {
    /// List facilities in the order they were added
    List,

    /// Add a new facility
    Add {
        /// Facility ID (must be unique)
        #[arg(value_name = "ID")]
        id: i64,

        #[arg(long)]
        name: String,

        /// Region or district label
        #[arg(long, alias = "district")]
        region: String,

        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// Patient capacity (greater than 0)
        #[arg(long)]
        capacity: u32,
    },

    /// Change attributes of an existing facility
    Edit {
        #[arg(value_name = "ID")]
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, alias = "district")]
        region: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,

        #[arg(long)]
        capacity: Option<u32>,
    },

    /// Remove a facility and its connections
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConnectionAction {
    /// List connections grouped by origin facility
    List {
        /// Only show connections leaving this facility
        #[arg(long)]
        from: Option<i64>,
    },

    /// Add a directed connection
    Add {
        #[arg(value_name = "FROM")]
        from: i64,

        #[arg(value_name = "TO")]
        to: i64,

        /// Distance in kilometres (greater than 0)
        #[arg(long)]
        distance: f64,

        /// Travel time in minutes (greater than 0)
        #[arg(long)]
        time: u32,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change attributes of an existing connection
    Edit {
        #[arg(value_name = "FROM")]
        from: i64,

        #[arg(value_name = "TO")]
        to: i64,

        #[arg(long)]
        distance: Option<f64>,

        #[arg(long)]
        time: Option<u32>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a connection
    Remove {
        #[arg(value_name = "FROM")]
        from: i64,

        #[arg(value_name = "TO")]
        to: i64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
