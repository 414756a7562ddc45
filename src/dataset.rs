//! CSV persistence for facility and connection datasets
//!
//! Reading is tolerant: a row that fails to parse or validate is skipped
//! with a warning, and a missing file reads as an empty dataset. Writing
//! always emits a header row.

use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Writer};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::common::ConfigBuilder;
use crate::constants::datasets::{DEFAULT_CONNECTIONS, DEFAULT_FACILITIES};
use crate::error::NetworkError;
use crate::graph::{Connection, Facility, FacilityId, FacilityNetwork};

/// Locations of the two datasets backing a network
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetPaths {
    pub facilities: PathBuf,
    pub connections: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            facilities: PathBuf::from(DEFAULT_FACILITIES),
            connections: PathBuf::from(DEFAULT_CONNECTIONS),
        }
    }
}

#[derive(Serialize)]
struct FacilityRow<'a> {
    #[serde(rename = "ID")]
    id: FacilityId,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "District")]
    district: &'a str,
    #[serde(rename = "Latitude", serialize_with = "four_places")]
    latitude: f64,
    #[serde(rename = "Longitude", serialize_with = "four_places")]
    longitude: f64,
    #[serde(rename = "Capacity")]
    capacity: u32,
}

#[derive(Serialize)]
struct ConnectionRow<'a> {
    #[serde(rename = "FromID")]
    from: FacilityId,
    #[serde(rename = "ToID")]
    to: FacilityId,
    #[serde(rename = "DistanceKM", serialize_with = "two_places")]
    distance: f64,
    #[serde(rename = "TimeMinutes")]
    travel_time: u32,
    #[serde(rename = "Description")]
    description: &'a str,
}

#[derive(Serialize)]
struct RelationshipRow<'a> {
    #[serde(rename = "Health Center ID")]
    id: FacilityId,
    #[serde(rename = "Health Center Name")]
    name: &'a str,
    #[serde(rename = "Connected To")]
    connected_to: String,
    #[serde(rename = "Distance (km)")]
    distance: String,
    #[serde(rename = "Time (min)")]
    travel_time: String,
    #[serde(rename = "Description")]
    description: &'a str,
}

fn four_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.4}"))
}

fn two_places<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// Load both datasets and assemble a network
///
/// Connections the store rejects (unknown endpoint, self-loop, duplicate
/// pair) are skipped with a warning, as are duplicate facility ids.
#[tracing::instrument(skip_all, fields(facilities = %paths.facilities.display(), connections = %paths.connections.display()))]
pub fn load_network(paths: &DatasetPaths) -> Result<FacilityNetwork, NetworkError> {
    let mut network = FacilityNetwork::new();

    for facility in read_facilities(&paths.facilities)? {
        let id = facility.id();
        if let Err(err) = network.add_facility(facility) {
            warn!(%id, %err, "skipping facility");
        }
    }

    for connection in read_connections(&paths.connections)? {
        let (from, to) = (connection.origin(), connection.destination());
        if let Err(err) = network.add_connection(connection) {
            warn!(%from, %to, %err, "skipping connection");
        }
    }

    debug!(
        facilities = network.facility_count(),
        connections = network.connection_count(),
        "network loaded"
    );
    Ok(network)
}

/// Rewrite both datasets from the current network
pub fn save_network(network: &FacilityNetwork, paths: &DatasetPaths) -> Result<(), NetworkError> {
    write_facilities(network, Writer::from_path(&paths.facilities)?)?;
    write_connections(network, Writer::from_path(&paths.connections)?)?;
    debug!("datasets saved");
    Ok(())
}

/// Write the relationship export to `path`, returning the number of rows
///
/// Missing parent directories are created.
pub fn export_relationships(network: &FacilityNetwork, path: &Path) -> Result<usize, NetworkError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_relationships(network, Writer::from_path(path)?)
}

pub fn read_facilities(path: &Path) -> Result<Vec<Facility>, NetworkError> {
    read_rows(path, parse_facility)
}

pub fn read_connections(path: &Path) -> Result<Vec<Connection>, NetworkError> {
    read_rows(path, parse_connection)
}

pub fn write_facilities<W: io::Write>(
    network: &FacilityNetwork,
    mut writer: Writer<W>,
) -> Result<(), NetworkError> {
    if network.is_empty() {
        writer.write_record(["ID", "Name", "District", "Latitude", "Longitude", "Capacity"])?;
    }
    for facility in network.facilities() {
        writer.serialize(FacilityRow {
            id: facility.id(),
            name: facility.name(),
            district: facility.region(),
            latitude: facility.latitude(),
            longitude: facility.longitude(),
            capacity: facility.capacity(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_connections<W: io::Write>(
    network: &FacilityNetwork,
    mut writer: Writer<W>,
) -> Result<(), NetworkError> {
    let connections = network.connections();
    if connections.is_empty() {
        writer.write_record(["FromID", "ToID", "DistanceKM", "TimeMinutes", "Description"])?;
    }
    for connection in connections {
        writer.serialize(ConnectionRow {
            from: connection.origin(),
            to: connection.destination(),
            distance: connection.distance(),
            travel_time: connection.travel_time(),
            description: connection.description(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_relationships<W: io::Write>(
    network: &FacilityNetwork,
    mut writer: Writer<W>,
) -> Result<usize, NetworkError> {
    let relationships = network.relationships();
    if relationships.is_empty() {
        writer.write_record([
            "Health Center ID",
            "Health Center Name",
            "Connected To",
            "Distance (km)",
            "Time (min)",
            "Description",
        ])?;
    }

    for relationship in &relationships {
        let row = match &relationship.link {
            Some(link) => RelationshipRow {
                id: relationship.facility_id,
                name: &relationship.facility_name,
                connected_to: link.to.to_string(),
                distance: format!("{:.2}", link.distance),
                travel_time: link.travel_time.to_string(),
                description: &link.description,
            },
            None => RelationshipRow {
                id: relationship.facility_id,
                name: &relationship.facility_name,
                connected_to: "None".to_string(),
                distance: "0".to_string(),
                travel_time: "0".to_string(),
                description: "-",
            },
        };
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(relationships.len())
}

fn read_rows<T>(
    path: &Path,
    parse: impl Fn(&StringRecord) -> Result<T, NetworkError>,
) -> Result<Vec<T>, NetworkError> {
    if !path.exists() {
        debug!(path = %path.display(), "dataset missing, starting empty");
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| NetworkError::DatasetReadError {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Line 1 is the header
        let line = idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %path.display(), line, %err, "skipping unreadable row");
                continue;
            }
        };
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        match parse(&record) {
            Ok(row) => rows.push(row),
            Err(err) => warn!(path = %path.display(), line, %err, "skipping row"),
        }
    }

    Ok(rows)
}

fn field<T: FromStr>(record: &StringRecord, index: usize, column: &str) -> Result<T, NetworkError> {
    let raw = record
        .get(index)
        .ok_or_else(|| NetworkError::invalid_record(format!("missing {column} column")))?;
    raw.trim()
        .parse()
        .map_err(|_| NetworkError::invalid_record(format!("{column} '{raw}' is not valid")))
}

fn parse_facility(record: &StringRecord) -> Result<Facility, NetworkError> {
    Facility::builder()
        .with_id(FacilityId::new(field(record, 0, "ID")?))
        .with_name(record.get(1).unwrap_or_default())
        .with_region(record.get(2).unwrap_or_default())
        .with_coordinates(field(record, 3, "Latitude")?, field(record, 4, "Longitude")?)
        .with_capacity(field(record, 5, "Capacity")?)
        .build()
}

fn parse_connection(record: &StringRecord) -> Result<Connection, NetworkError> {
    // Unquoted commas in the trailing description split it into extra fields
    let description = record.iter().skip(4).collect::<Vec<_>>().join(",");

    Connection::builder()
        .with_from(FacilityId::new(field(record, 0, "FromID")?))
        .with_to(FacilityId::new(field(record, 1, "ToID")?))
        .with_distance(field(record, 2, "DistanceKM")?)
        .with_travel_time(field(record, 3, "TimeMinutes")?)
        .with_description(&description)
        .build()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_facilities_skips_invalid_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "centers.csv",
            "ID,Name,District,Latitude,Longitude,Capacity\n\
             1, Central ,Gasabo,-1.9441,30.0619,120\n\
             two,Broken,Gasabo,0,0,10\n\
             3,Far North,Musanze,95.0,29.6,40\n\
             \n\
             4,Lakeside,Rubavu,-1.6792,29.2599,0\n\
             5,Hilltop,Huye,-2.5967,29.7394,35\n",
        );

        let facilities = read_facilities(&path).unwrap();

        let names: Vec<_> = facilities.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Central", "Hilltop"]);
        assert_eq!(facilities[0].region(), "Gasabo");
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();

        let connections = read_connections(&dir.path().join("absent.csv")).unwrap();
        assert!(connections.is_empty());
    }

    #[test]
    fn test_description_with_unquoted_commas() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "links.csv",
            "FromID,ToID,DistanceKM,TimeMinutes,Description\n\
             1,2,12.5,30,Paved road, then gravel\n",
        );

        let connections = read_connections(&path).unwrap();
        assert_eq!(connections[0].description(), "Paved road, then gravel");
    }

    #[test]
    fn test_load_network_drops_dangling_connections() {
        let dir = TempDir::new().unwrap();
        let paths = DatasetPaths {
            facilities: write(
                &dir,
                "centers.csv",
                "ID,Name,District,Latitude,Longitude,Capacity\n\
                 1,A,North,0,0,5\n\
                 2,B,North,0,0,50\n",
            ),
            connections: write(
                &dir,
                "links.csv",
                "FromID,ToID,DistanceKM,TimeMinutes,Description\n\
                 1,2,10,15,Main\n\
                 1,9,4,5,Nowhere\n\
                 2,2,1,1,Loop\n\
                 1,2,11,16,Duplicate\n",
            ),
        };

        let network = load_network(&paths).unwrap();

        assert_eq!(network.facility_count(), 2);
        assert_eq!(network.connection_count(), 1);
        assert_eq!(
            network
                .connection(FacilityId::new(1), FacilityId::new(2))
                .unwrap()
                .description(),
            "Main"
        );
    }

    #[test]
    fn test_save_then_load_keeps_order_and_precision() {
        let dir = TempDir::new().unwrap();
        let paths = DatasetPaths {
            facilities: write(
                &dir,
                "centers.csv",
                "ID,Name,District,Latitude,Longitude,Capacity\n\
                 7,Seven,East,-1.5,30.25,10\n\
                 3,Three,East,-1.25,30.5,20\n",
            ),
            connections: write(
                &dir,
                "links.csv",
                "FromID,ToID,DistanceKM,TimeMinutes,Description\n\
                 3,7,2.346,9,Short hop\n\
                 7,3,8,12,\"Bridge, north side\"\n",
            ),
        };

        let network = load_network(&paths).unwrap();
        save_network(&network, &paths).unwrap();

        let facilities = fs::read_to_string(&paths.facilities).unwrap();
        assert_eq!(
            facilities,
            "ID,Name,District,Latitude,Longitude,Capacity\n\
             7,Seven,East,-1.5000,30.2500,10\n\
             3,Three,East,-1.2500,30.5000,20\n"
        );

        let connections = fs::read_to_string(&paths.connections).unwrap();
        assert_eq!(
            connections,
            "FromID,ToID,DistanceKM,TimeMinutes,Description\n\
             7,3,8.00,12,\"Bridge, north side\"\n\
             3,7,2.35,9,Short hop\n"
        );

        let reloaded = load_network(&paths).unwrap();
        assert_eq!(reloaded.connection_count(), 2);
    }

    #[test]
    fn test_empty_network_writes_headers() {
        let mut buffer = Vec::new();
        write_connections(&FacilityNetwork::new(), Writer::from_writer(&mut buffer)).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "FromID,ToID,DistanceKM,TimeMinutes,Description\n"
        );
    }

    #[test]
    fn test_relationship_export() {
        let dir = TempDir::new().unwrap();
        let paths = DatasetPaths {
            facilities: write(
                &dir,
                "centers.csv",
                "ID,Name,District,Latitude,Longitude,Capacity\n\
                 1,Central,North,0,0,5\n\
                 2,Lakeside,North,0,0,50\n",
            ),
            connections: write(
                &dir,
                "links.csv",
                "FromID,ToID,DistanceKM,TimeMinutes,Description\n\
                 1,2,10,15,Main road\n",
            ),
        };
        let network = load_network(&paths).unwrap();

        let mut buffer = Vec::new();
        let rows = write_relationships(&network, Writer::from_writer(&mut buffer)).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Health Center ID,Health Center Name,Connected To,Distance (km),Time (min),Description\n\
             1,Central,2,10.00,15,Main road\n\
             2,Lakeside,None,0,0,-\n"
        );
    }
}
