//! # Routing Module
//!
//! Distance-weighted path searches over a [`FacilityNetwork`].
//!
//! ## Algorithms
//!
//! - **shortest_route**: single-source Dijkstra that stops once the
//!   destination is settled
//! - **all_pairs**: Floyd–Warshall over every facility, with a next-hop
//!   matrix for path reconstruction
//! - **nearest_with_capacity**: Dijkstra that stops at the first settled
//!   facility meeting a capacity threshold
//!
//! The two single-source searches share one priority-queue relaxation core
//! and return the same [`Route`] shape. Every call allocates its own working
//! state; nothing persists between calls.
//!
//! ## Example
//!
//! ```
//! use health_network::common::ConfigBuilder;
//! use health_network::graph::{Connection, Facility, FacilityId, FacilityNetwork};
//! use health_network::routing::shortest_route;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut network = FacilityNetwork::new();
//! for id in 1..=3 {
//!     network.add_facility(
//!         Facility::builder()
//!             .with_id(FacilityId::new(id))
//!             .with_name(&format!("HC{id}"))
//!             .with_region("North")
//!             .with_coordinates(0.0, 0.0)
//!             .with_capacity(10)
//!             .build()?,
//!     )?;
//! }
//! for (from, to, distance) in [(1, 2, 10.0), (2, 3, 5.0), (1, 3, 20.0)] {
//!     network.add_connection(
//!         Connection::builder()
//!             .with_from(FacilityId::new(from))
//!             .with_to(FacilityId::new(to))
//!             .with_distance(distance)
//!             .with_travel_time(10)
//!             .build()?,
//!     )?;
//! }
//!
//! let route = shortest_route(&network, FacilityId::new(1), FacilityId::new(3))?;
//! assert_eq!(route.total_distance, 15.0);
//! assert_eq!(route.hops.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`FacilityNetwork`]: crate::graph::FacilityNetwork

mod all_pairs;
mod capacity;
pub(crate) mod frontier;
mod shortest_path;

pub use all_pairs::{DistanceMatrix, all_pairs};
pub use capacity::{NearestFacility, nearest_with_capacity};
pub use shortest_path::{Hop, Route, shortest_route};
