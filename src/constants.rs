//! Configuration constants for health-network
//!
//! Defaults used when neither a command line flag nor the settings file
//! provides a value.

use std::ops::RangeInclusive;

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Dataset file locations
pub mod datasets {
    /// Facility dataset read and written by every command
    pub const DEFAULT_FACILITIES: &str = "health_centers.csv";

    /// Connection dataset read and written by every command
    pub const DEFAULT_CONNECTIONS: &str = "connections.csv";

    /// Relationship export written by the `relationships` command
    pub const DEFAULT_RELATIONSHIPS: &str = "relationship_table.csv";

    /// Settings file picked up from the working directory
    pub const SETTINGS_FILE: &str = "health-network.toml";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding a tracing filter directive
    pub const ENV_VAR: &str = "HEALTH_NETWORK_LOG";

    pub const DEFAULT_DIRECTIVE: &str = "health_network=warn";

    pub const VERBOSE_DIRECTIVE: &str = "health_network=debug";
}

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
