//! # Cycle Detection Module
//!
//! Finds a directed cycle in the facility network, if one exists.
//!
//! ## Algorithm
//!
//! Depth-first search from every unvisited facility, tracking the facilities
//! on the current path. An edge back to a facility still on the path closes
//! a cycle; the path is cut at that facility's position and the facility is
//! appended again to close the loop. The search uses an explicit frame stack
//! so its depth does not depend on the call stack. Time is O(V + E).
//!
//! ## Example
//!
//! ```
//! use health_network::common::ConfigBuilder;
//! use health_network::detector::CycleDetector;
//! use health_network::graph::{Connection, Facility, FacilityId, FacilityNetwork};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut network = FacilityNetwork::new();
//! for id in [1, 2] {
//!     network.add_facility(
//!         Facility::builder()
//!             .with_id(FacilityId::new(id))
//!             .with_name(&format!("Site {id}"))
//!             .with_region("West")
//!             .with_coordinates(0.0, 0.0)
//!             .with_capacity(5)
//!             .build()?,
//!     )?;
//! }
//! for (from, to) in [(1, 2), (2, 1)] {
//!     network.add_connection(
//!         Connection::builder()
//!             .with_from(FacilityId::new(from))
//!             .with_to(FacilityId::new(to))
//!             .with_distance(3.0)
//!             .with_travel_time(4)
//!             .build()?,
//!     )?;
//! }
//!
//! let mut detector = CycleDetector::new();
//! assert!(detector.detect_cycle(&network));
//! assert_eq!(detector.cycle().map(|c| c.len()), Some(2));
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
