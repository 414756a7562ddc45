//! Core graph types
//!
//! Facilities are the nodes of the network and connections its directed,
//! weighted edges. Both are only constructed through their builders, which
//! reject out-of-range attributes before anything reaches the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::ConfigBuilder;
use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error::NetworkError;

/// Caller-assigned facility identifier
///
/// Identifiers are unique within a network but need not be contiguous or
/// sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(i64);

impl FacilityId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for FacilityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical site with a patient capacity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    id: FacilityId,
    name: String,
    region: String,
    latitude: f64,
    longitude: f64,
    capacity: u32,
}

impl Facility {
    pub fn builder() -> FacilityBuilder {
        FacilityBuilder::new()
    }

    pub fn id(&self) -> FacilityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Start a builder pre-filled with this facility's attributes
    pub fn to_builder(&self) -> FacilityBuilder {
        FacilityBuilder {
            id: Some(self.id),
            name: Some(self.name.clone()),
            region: Some(self.region.clone()),
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            capacity: Some(self.capacity),
        }
    }
}

#[derive(Default)]
pub struct FacilityBuilder {
    id: Option<FacilityId>,
    name: Option<String>,
    region: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    capacity: Option<u32>,
}

impl FacilityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: FacilityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.trim().to_string());
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.trim().to_string());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

fn missing(field: &str) -> NetworkError {
    NetworkError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl ConfigBuilder for FacilityBuilder {
    type Config = Facility;

    fn build(self) -> Result<Self::Config, NetworkError> {
        let id = self.id.ok_or_else(|| missing("id"))?;
        let name = self.name.ok_or_else(|| missing("name"))?;
        let region = self.region.ok_or_else(|| missing("region"))?;
        let latitude = self.latitude.ok_or_else(|| missing("latitude"))?;
        let longitude = self.longitude.ok_or_else(|| missing("longitude"))?;
        let capacity = self.capacity.ok_or_else(|| missing("capacity"))?;

        if name.is_empty() {
            return Err(NetworkError::invalid_record(format!(
                "facility {id}: name cannot be empty"
            )));
        }
        if region.is_empty() {
            return Err(NetworkError::invalid_record(format!(
                "facility {id}: region cannot be empty"
            )));
        }
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(NetworkError::invalid_record(format!(
                "facility {id}: latitude {latitude} is outside -90..=90"
            )));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(NetworkError::invalid_record(format!(
                "facility {id}: longitude {longitude} is outside -180..=180"
            )));
        }
        if capacity == 0 {
            return Err(NetworkError::invalid_record(format!(
                "facility {id}: capacity must be greater than 0"
            )));
        }

        Ok(Facility {
            id,
            name,
            region,
            latitude,
            longitude,
            capacity,
        })
    }
}

/// A directed, weighted edge between two facilities
///
/// `distance` is the weight every algorithm uses. `travel_time` (minutes) is
/// carried for reporting only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    from: FacilityId,
    to: FacilityId,
    distance: f64,
    travel_time: u32,
    description: String,
}

impl Connection {
    pub fn builder() -> ConnectionBuilder {
        ConnectionBuilder::new()
    }

    pub fn origin(&self) -> FacilityId {
        self.from
    }

    pub fn destination(&self) -> FacilityId {
        self.to
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn travel_time(&self) -> u32 {
        self.travel_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Start a builder pre-filled with this connection's attributes
    pub fn to_builder(&self) -> ConnectionBuilder {
        ConnectionBuilder {
            from: Some(self.from),
            to: Some(self.to),
            distance: Some(self.distance),
            travel_time: Some(self.travel_time),
            description: Some(self.description.clone()),
        }
    }
}

#[derive(Default)]
pub struct ConnectionBuilder {
    from: Option<FacilityId>,
    to: Option<FacilityId>,
    distance: Option<f64>,
    travel_time: Option<u32>,
    description: Option<String>,
}

impl ConnectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from(mut self, from: FacilityId) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: FacilityId) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_travel_time(mut self, travel_time: u32) -> Self {
        self.travel_time = Some(travel_time);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.trim().to_string());
        self
    }
}

impl ConfigBuilder for ConnectionBuilder {
    type Config = Connection;

    fn build(self) -> Result<Self::Config, NetworkError> {
        let from = self.from.ok_or_else(|| missing("from"))?;
        let to = self.to.ok_or_else(|| missing("to"))?;
        let distance = self.distance.ok_or_else(|| missing("distance"))?;
        let travel_time = self.travel_time.ok_or_else(|| missing("travel_time"))?;

        // Weights must stay strictly positive for the relaxation searches.
        if !distance.is_finite() || distance <= 0.0 {
            return Err(NetworkError::invalid_record(format!(
                "connection {from} -> {to}: distance must be greater than 0"
            )));
        }
        if travel_time == 0 {
            return Err(NetworkError::invalid_record(format!(
                "connection {from} -> {to}: travel time must be greater than 0"
            )));
        }

        Ok(Connection {
            from,
            to,
            distance,
            travel_time,
            description: self.description.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic() -> FacilityBuilder {
        Facility::builder()
            .with_id(FacilityId::new(7))
            .with_name("  Kibuye Clinic ")
            .with_region("West")
            .with_coordinates(-2.06, 29.35)
            .with_capacity(40)
    }

    #[test]
    fn test_facility_builder_trims_text_fields() {
        let facility = clinic().build().unwrap();

        assert_eq!(facility.id(), FacilityId::new(7));
        assert_eq!(facility.name(), "Kibuye Clinic");
        assert_eq!(facility.region(), "West");
        assert_eq!(facility.capacity(), 40);
    }

    #[test]
    fn test_facility_builder_rejects_out_of_range_latitude() {
        let err = clinic().with_latitude(91.0).build().unwrap_err();
        assert!(matches!(err, NetworkError::InvalidRecord { .. }));
    }

    #[test]
    fn test_facility_builder_rejects_zero_capacity() {
        let err = clinic().with_capacity(0).build().unwrap_err();
        assert!(err.to_string().contains("capacity must be greater than 0"));
    }

    #[test]
    fn test_facility_builder_requires_name() {
        let err = Facility::builder()
            .with_id(FacilityId::new(1))
            .with_region("North")
            .with_coordinates(0.0, 0.0)
            .with_capacity(1)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: name"
        );
    }

    #[test]
    fn test_to_builder_round_trips_attributes() {
        let facility = clinic().build().unwrap();
        let edited = facility.to_builder().with_capacity(55).build().unwrap();

        assert_eq!(edited.name(), facility.name());
        assert_eq!(edited.capacity(), 55);
    }

    #[test]
    fn test_connection_builder_rejects_non_positive_distance() {
        for distance in [0.0, -3.5, f64::NAN, f64::INFINITY] {
            let result = Connection::builder()
                .with_from(FacilityId::new(1))
                .with_to(FacilityId::new(2))
                .with_distance(distance)
                .with_travel_time(10)
                .build();
            assert!(result.is_err(), "distance {distance} should be rejected");
        }
    }

    #[test]
    fn test_connection_builder_defaults_description() {
        let connection = Connection::builder()
            .with_from(FacilityId::new(1))
            .with_to(FacilityId::new(2))
            .with_distance(12.5)
            .with_travel_time(20)
            .build()
            .unwrap();

        assert_eq!(connection.description(), "");
        assert_eq!(connection.distance(), 12.5);
    }
}
