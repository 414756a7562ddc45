//! Property tests over small random networks

use std::collections::{HashMap, VecDeque};

use health_network::common::ConfigBuilder;
use health_network::detector::CycleDetector;
use health_network::error::NetworkError;
use health_network::graph::{Connection, Facility, FacilityId, FacilityNetwork};
use health_network::routing::{NearestFacility, all_pairs, nearest_with_capacity, shortest_route};
use health_network::spanning_tree::minimum_spanning_tree;
use proptest::prelude::*;

/// Ids are deliberately sparse and unordered
fn facility_id(position: usize) -> FacilityId {
    FacilityId::new(1000 - 37 * position as i64)
}

#[derive(Debug, Clone)]
struct Sample {
    capacities: Vec<u32>,
    edges: Vec<(usize, usize, u8)>,
}

impl Sample {
    fn network(&self) -> FacilityNetwork {
        let mut network = FacilityNetwork::new();
        for (position, &capacity) in self.capacities.iter().enumerate() {
            network
                .add_facility(
                    Facility::builder()
                        .with_id(facility_id(position))
                        .with_name(&format!("Facility {position}"))
                        .with_region("Sample")
                        .with_coordinates(0.0, 0.0)
                        .with_capacity(capacity)
                        .build()
                        .unwrap(),
                )
                .unwrap();
        }
        for &(from, to, distance) in &self.edges {
            let connection = Connection::builder()
                .with_from(facility_id(from))
                .with_to(facility_id(to))
                .with_distance(f64::from(distance))
                .with_travel_time(1)
                .build()
                .unwrap();
            // Self-loops and repeated pairs are rejected; the rest stay
            let _ = network.add_connection(connection);
        }
        network
    }
}

fn arb_sample() -> impl Strategy<Value = Sample> {
    (1usize..=7).prop_flat_map(|n| {
        (
            prop::collection::vec(1u32..=100, n),
            prop::collection::vec((0..n, 0..n, 1u8..=20), 0..=n * 3),
        )
            .prop_map(|(capacities, edges)| Sample { capacities, edges })
    })
}

fn ids(network: &FacilityNetwork) -> Vec<FacilityId> {
    network.facilities().map(Facility::id).collect()
}

/// Minimum distance over every simple path, by exhaustive search
fn exhaustive_distance(network: &FacilityNetwork, from: FacilityId, to: FacilityId) -> Option<f64> {
    fn walk(
        network: &FacilityNetwork,
        at: FacilityId,
        to: FacilityId,
        so_far: f64,
        on_path: &mut Vec<FacilityId>,
        best: &mut Option<f64>,
    ) {
        if at == to {
            if best.is_none_or(|best| so_far < best) {
                *best = Some(so_far);
            }
            return;
        }
        for connection in network.outgoing(at).unwrap() {
            let next = connection.destination();
            if on_path.contains(&next) {
                continue;
            }
            on_path.push(next);
            walk(network, next, to, so_far + connection.distance(), on_path, best);
            on_path.pop();
        }
    }

    let mut best = None;
    walk(network, from, to, 0.0, &mut vec![from], &mut best);
    best
}

/// Kahn's algorithm; true when some facility can never be peeled off
fn has_cycle_by_topological_sort(network: &FacilityNetwork) -> bool {
    let mut in_degree: HashMap<FacilityId, usize> =
        ids(network).into_iter().map(|id| (id, 0)).collect();
    for connection in network.connections() {
        *in_degree.entry(connection.destination()).or_default() += 1;
    }

    let mut ready: VecDeque<_> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(&id, _)| id)
        .collect();
    let mut peeled = 0;
    while let Some(id) = ready.pop_front() {
        peeled += 1;
        for connection in network.outgoing(id).unwrap() {
            let degree = in_degree.entry(connection.destination()).or_default();
            *degree -= 1;
            if *degree == 0 {
                ready.push_back(connection.destination());
            }
        }
    }

    peeled < network.facility_count()
}

proptest! {
    #[test]
    fn dijkstra_matches_exhaustive_search(sample in arb_sample()) {
        let network = sample.network();
        for from in ids(&network) {
            for to in ids(&network) {
                if from == to {
                    continue;
                }
                match (shortest_route(&network, from, to), exhaustive_distance(&network, from, to)) {
                    (Ok(route), Some(best)) => {
                        prop_assert_eq!(route.total_distance, best);
                        prop_assert_eq!(route.path.first(), Some(&from));
                        prop_assert_eq!(route.path.last(), Some(&to));
                        let walked: f64 = route.hops.iter().map(|hop| hop.distance).sum();
                        prop_assert_eq!(walked, best);
                    }
                    (Err(NetworkError::Unreachable { .. }), None) => {}
                    (result, best) => {
                        prop_assert!(false, "{from} -> {to}: {result:?} vs {best:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn floyd_warshall_matches_dijkstra(sample in arb_sample()) {
        let network = sample.network();
        let matrix = all_pairs(&network);

        for from in ids(&network) {
            for to in ids(&network) {
                let entry = matrix.distance(from, to).unwrap();
                if from == to {
                    prop_assert_eq!(entry, 0.0);
                    continue;
                }
                match shortest_route(&network, from, to) {
                    Ok(route) => prop_assert_eq!(entry, route.total_distance),
                    Err(_) => prop_assert!(entry.is_infinite()),
                }
            }
        }
    }

    #[test]
    fn next_hop_paths_retrace_matrix_entries(sample in arb_sample()) {
        let network = sample.network();
        let matrix = all_pairs(&network);

        for from in ids(&network) {
            for to in ids(&network) {
                let entry = matrix.distance(from, to).unwrap();
                if entry.is_infinite() {
                    prop_assert!(matrix.path(from, to).is_err());
                    continue;
                }

                let path = matrix.path(from, to).unwrap();
                let mut walked = 0.0;
                for pair in path.windows(2) {
                    let connection = network.connection(pair[0], pair[1]);
                    prop_assert!(connection.is_some());
                    walked += connection.map_or(0.0, Connection::distance);
                }
                prop_assert_eq!(walked, entry);
            }
        }
    }

    #[test]
    fn cycle_detector_is_exact(sample in arb_sample()) {
        let network = sample.network();
        let mut detector = CycleDetector::new();

        let found = detector.detect_cycle(&network);

        prop_assert_eq!(found, has_cycle_by_topological_sort(&network));
        if let Some(cycle) = detector.cycle() {
            let walk = cycle.facilities();
            prop_assert_eq!(walk.first(), walk.last());
            for (from, to) in cycle.edges() {
                prop_assert!(network.connection(from, to).is_some());
            }
        }
    }

    #[test]
    fn spanning_tree_is_bounded(sample in arb_sample()) {
        let network = sample.network();
        let root = facility_id(0);

        let tree = minimum_spanning_tree(&network, root).unwrap();

        prop_assert!(tree.edges.len() < network.facility_count());
        let total: f64 = tree.edges.iter().map(|edge| edge.distance).sum();
        prop_assert_eq!(total, tree.total_distance);

        let mut children: Vec<_> = tree.edges.iter().map(|edge| edge.to).collect();
        prop_assert!(!children.contains(&root));
        children.sort();
        children.dedup();
        prop_assert_eq!(children.len(), tree.edges.len());
    }

    #[test]
    fn router_returns_a_nearest_qualifying_facility(
        sample in arb_sample(),
        min_capacity in 1u32..=100,
    ) {
        let network = sample.network();
        let origin = facility_id(0);

        let best = ids(&network)
            .into_iter()
            .filter(|&id| id != origin)
            .filter(|&id| network.facility(id).is_some_and(|f| f.capacity() >= min_capacity))
            .filter_map(|id| shortest_route(&network, origin, id).ok())
            .map(|route| route.total_distance)
            .reduce(f64::min);

        match nearest_with_capacity(&network, origin, min_capacity) {
            Ok(NearestFacility::Origin { facility }) => {
                prop_assert!(facility.capacity() >= min_capacity);
            }
            Ok(NearestFacility::Routed { facility, route }) => {
                prop_assert!(network.facility(origin).is_some_and(|f| f.capacity() < min_capacity));
                prop_assert!(facility.capacity() >= min_capacity);
                prop_assert_eq!(Some(route.total_distance), best);
            }
            Err(NetworkError::NoMatch { .. }) => prop_assert_eq!(best, None),
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }
}
