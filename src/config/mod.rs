//! # Configuration Module
//!
//! Configuration structures for every health-network command, plus the
//! optional settings file. Each command config is assembled through a
//! builder whose fields are all required, so a command never runs with a
//! half-filled config.
//!
//! ## Command Configurations
//!
//! - **FacilityConfig** / **ConnectionConfig**: list and edit the network
//! - **RelationshipsConfig**: relationship table export
//! - **RouteConfig**, **TraverseConfig**, **MatrixConfig**: path queries
//! - **CycleCheckConfig**: cycle detection
//! - **SpanningTreeConfig**: spanning tree from a root
//! - **NearestConfig**: capacity-constrained search
//!
//! ## Example
//!
//! ```
//! use health_network::cli::OutputFormat;
//! use health_network::common::ConfigBuilder;
//! use health_network::config::RouteConfig;
//! use health_network::dataset::DatasetPaths;
//! use health_network::graph::FacilityId;
//!
//! let config = RouteConfig::builder()
//!     .with_datasets(DatasetPaths::default())
//!     .with_format(OutputFormat::Json)
//!     .with_from(FacilityId::new(1))
//!     .with_to(FacilityId::new(3))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.to, FacilityId::new(3));
//!
//! // Leaving out a field is reported instead of defaulted
//! assert!(RouteConfig::builder().build().is_err());
//! ```

pub mod connection;
pub mod cycle;
pub mod facility;
pub mod matrix;
pub mod nearest;
pub mod relationships;
pub mod route;
pub mod settings;
pub mod spanning_tree;
pub mod traverse;

pub use connection::{ConnectionConfig, ConnectionEdit, ConnectionOperation};
pub use cycle::CycleCheckConfig;
pub use facility::{FacilityConfig, FacilityEdit, FacilityOperation};
pub use matrix::MatrixConfig;
pub use nearest::NearestConfig;
pub use relationships::RelationshipsConfig;
pub use route::RouteConfig;
pub use settings::{ExportSettings, NetworkSettings};
pub use spanning_tree::SpanningTreeConfig;
pub use traverse::TraverseConfig;
