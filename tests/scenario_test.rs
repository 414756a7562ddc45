//! End-to-end scenario over the library interface

use health_network::common::ConfigBuilder;
use health_network::detector::CycleDetector;
use health_network::error::NetworkError;
use health_network::graph::{Connection, Facility, FacilityId, FacilityNetwork};
use health_network::routing::{NearestFacility, all_pairs, nearest_with_capacity, shortest_route};
use health_network::spanning_tree::minimum_spanning_tree;
use health_network::traversal::breadth_first;
use pretty_assertions::assert_eq;

fn id(value: i64) -> FacilityId {
    FacilityId::new(value)
}

/// A (5) -> B (50) -> C (10), plus a longer direct A -> C
fn three_facilities() -> FacilityNetwork {
    let facilities = [(1, "A", 5), (2, "B", 50), (3, "C", 10)].map(|(key, name, capacity)| {
        Facility::builder()
            .with_id(id(key))
            .with_name(name)
            .with_region("Central")
            .with_coordinates(-1.95, 30.06)
            .with_capacity(capacity)
            .build()
            .unwrap()
    });
    let connections = [(1, 2, 10.0, 15), (2, 3, 5.0, 10), (1, 3, 20.0, 30)].map(
        |(from, to, distance, minutes)| {
            Connection::builder()
                .with_from(id(from))
                .with_to(id(to))
                .with_distance(distance)
                .with_travel_time(minutes)
                .with_description("Paved road")
                .build()
                .unwrap()
        },
    );
    FacilityNetwork::from_records(facilities, connections).unwrap()
}

#[test]
fn test_shortest_route_prefers_the_detour() {
    let network = three_facilities();

    let route = shortest_route(&network, id(1), id(3)).unwrap();

    assert_eq!(route.total_distance, 15.0);
    assert_eq!(route.path, vec![id(1), id(2), id(3)]);
    assert_eq!(route.total_travel_time(), 25);
}

#[test]
fn test_router_takes_first_qualifying_facility() {
    let network = three_facilities();

    let nearest = nearest_with_capacity(&network, id(1), 10).unwrap();

    match &nearest {
        NearestFacility::Routed { facility, route } => {
            assert_eq!(facility.id(), id(2));
            assert_eq!(facility.capacity(), 50);
            assert_eq!(route.path, vec![id(1), id(2)]);
        }
        other => panic!("Expected a routed result, got {other:?}"),
    }
    assert_eq!(nearest.distance(), 10.0);
}

#[test]
fn test_removing_a_facility_reroutes() {
    let mut network = three_facilities();

    network.remove_facility(id(2)).unwrap();

    assert_eq!(network.connection_count(), 1);
    let route = shortest_route(&network, id(1), id(3)).unwrap();
    assert_eq!(route.total_distance, 20.0);
    assert_eq!(route.path, vec![id(1), id(3)]);
}

#[test]
fn test_matrix_agrees_with_the_scenario() {
    let network = three_facilities();

    let matrix = all_pairs(&network);

    assert_eq!(matrix.distance(id(1), id(3)).unwrap(), 15.0);
    assert!(matrix.distance(id(3), id(1)).unwrap().is_infinite());
    assert_eq!(
        matrix.route(&network, id(1), id(3)).unwrap(),
        shortest_route(&network, id(1), id(3)).unwrap()
    );
}

#[test]
fn test_other_analyses() {
    let network = three_facilities();

    assert_eq!(
        breadth_first(&network, id(1)).unwrap().ids(),
        vec![id(1), id(2), id(3)]
    );

    let mut detector = CycleDetector::new();
    assert!(!detector.detect_cycle(&network));

    let tree = minimum_spanning_tree(&network, id(1)).unwrap();
    assert!(tree.is_fully_connected());
    assert_eq!(tree.total_distance, 15.0);
}

#[test]
fn test_error_outcomes() {
    let mut network = three_facilities();

    assert!(matches!(
        shortest_route(&network, id(3), id(1)),
        Err(NetworkError::Unreachable { .. })
    ));
    assert!(matches!(
        shortest_route(&network, id(1), id(1)),
        Err(NetworkError::InvalidOperation { .. })
    ));
    assert!(matches!(
        nearest_with_capacity(&network, id(3), 100),
        Err(NetworkError::NoMatch { min_capacity: 100 })
    ));
    assert!(matches!(
        network.remove_facility(id(9)),
        Err(NetworkError::NotFound { .. })
    ));

    let loop_back = Connection::builder()
        .with_from(id(2))
        .with_to(id(2))
        .with_distance(1.0)
        .with_travel_time(1)
        .build()
        .unwrap();
    assert!(matches!(
        network.add_connection(loop_back),
        Err(NetworkError::InvalidOperation { .. })
    ));
}
