//! Integration tests running the health-network binary

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn health_network(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("health-network");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("HEALTH_NETWORK_LOG")
        .env_remove("HEALTH_NETWORK_FACILITIES")
        .env_remove("HEALTH_NETWORK_CONNECTIONS")
        .env_remove("HEALTH_NETWORK_CONFIG")
        .env_remove("HEALTH_NETWORK_FORMAT");
    cmd
}

/// Write the three-facility scenario into the default dataset files
fn scenario(dir: &TempDir) {
    fs::write(
        dir.path().join("health_centers.csv"),
        "ID,Name,District,Latitude,Longitude,Capacity\n\
         1,A,North,-1.5,30.1,5\n\
         2,B,North,-1.6,30.2,50\n\
         3,C,South,-1.7,30.3,10\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("connections.csv"),
        "FromID,ToID,DistanceKM,TimeMinutes,Description\n\
         1,2,10.00,15,Hill road\n\
         2,3,5.00,10,Valley road\n\
         1,3,20.00,30,Highway\n",
    )
    .unwrap();
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();

    health_network(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("spanning-tree"))
        .stdout(predicate::str::contains("nearest"));
}

#[test]
fn test_route_json() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);

    health_network(dir.path())
        .args(["route", "1", "3", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_distance\": 15.0"));
}

#[test]
fn test_nearest_human() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);

    health_network(dir.path())
        .args(["nearest", "1", "--min-capacity", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nearest facility: [2] B"));
}

#[test]
fn test_unreachable_route_fails() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);

    health_network(dir.path())
        .args(["route", "3", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to find a route"));
}

#[test]
fn test_facility_add_is_persisted() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);

    health_network(dir.path())
        .args([
            "facility",
            "add",
            "4",
            "--name",
            "D",
            "--region",
            "West",
            "--latitude",
            "-2.0",
            "--longitude",
            "29.5",
            "--capacity",
            "80",
        ])
        .assert()
        .success();

    let facilities = fs::read_to_string(dir.path().join("health_centers.csv")).unwrap();
    assert!(facilities.ends_with("4,D,West,-2.0000,29.5000,80\n"));

    health_network(dir.path())
        .args(["facility", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"D\""));
}

#[test]
fn test_removing_facility_drops_its_connections() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);

    health_network(dir.path())
        .args(["facility", "remove", "2"])
        .assert()
        .success();

    let connections = fs::read_to_string(dir.path().join("connections.csv")).unwrap();
    assert!(!connections.contains("Hill road"));
    assert!(!connections.contains("Valley road"));

    health_network(dir.path())
        .args(["route", "1", "3", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_distance\": 20.0"));
}

#[test]
fn test_cycle_exit_code() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);

    health_network(dir.path())
        .args(["cycle", "--error-on-cycle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cycles detected"));

    health_network(dir.path())
        .args(["connection", "add", "3", "1", "--distance", "7.5", "--time", "12"])
        .assert()
        .success();

    health_network(dir.path())
        .args(["cycle", "--error-on-cycle"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found a cycle"));
}

#[test]
fn test_relationships_export_uses_settings_file() {
    let dir = TempDir::new().unwrap();
    scenario(&dir);
    fs::write(
        dir.path().join("health-network.toml"),
        "[export]\nrelationships = \"reports/table.csv\"\n",
    )
    .unwrap();

    health_network(dir.path())
        .arg("relationships")
        .assert()
        .success()
        .stdout(predicate::str::contains("[3] C → None"));

    let table = fs::read_to_string(dir.path().join("reports/table.csv")).unwrap();
    assert!(table.contains("3,C,None,0,0,-"));
}

#[test]
fn test_broken_settings_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("health-network.toml"), "[datasets\n").unwrap();

    health_network(dir.path())
        .args(["facility", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML syntax"));
}
