//! # Facility Network Store
//!
//! The store owns every facility and every directed connection between them.
//! All algorithms borrow it read-only for the duration of one call.
//!
//! ## Components
//!
//! - **FacilityNetwork**: petgraph arena of facilities with an id lookup
//!   table, kept in insertion order
//! - **Facility** / **Connection**: validated node and edge records, built
//!   through their builders
//! - **Relationship**: one row of the facility → connection export
//!
//! ## Example
//!
//! ```
//! use health_network::common::ConfigBuilder;
//! use health_network::graph::{Connection, Facility, FacilityId, FacilityNetwork};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut network = FacilityNetwork::new();
//!
//! for (id, name) in [(1, "Central"), (2, "Lakeside")] {
//!     network.add_facility(
//!         Facility::builder()
//!             .with_id(FacilityId::new(id))
//!             .with_name(name)
//!             .with_region("North")
//!             .with_coordinates(-1.95, 30.06)
//!             .with_capacity(20)
//!             .build()?,
//!     )?;
//! }
//!
//! network.add_connection(
//!     Connection::builder()
//!         .with_from(FacilityId::new(1))
//!         .with_to(FacilityId::new(2))
//!         .with_distance(12.5)
//!         .with_travel_time(25)
//!         .with_description("Main road")
//!         .build()?,
//! )?;
//!
//! assert_eq!(network.outgoing(FacilityId::new(1))?.len(), 1);
//!
//! // Removing a facility drops every connection touching it
//! network.remove_facility(FacilityId::new(2))?;
//! assert_eq!(network.connection_count(), 0);
//! # Ok(())
//! # }
//! ```

mod network;
mod types;

pub use network::{FacilityNetwork, Relationship, RelationshipLink};
pub use types::{Connection, ConnectionBuilder, Facility, FacilityBuilder, FacilityId};
