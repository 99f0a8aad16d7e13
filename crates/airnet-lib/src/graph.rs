use std::collections::HashMap;

use tracing::{debug, warn};

use crate::airport::{AirportId, SizeClass};
use crate::cost::CostModel;
use crate::network::Network;

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: AirportId,
    pub aircraft: SizeClass,
    pub cost: f64,
}

/// Graph structure used by pathfinding algorithms.
///
/// Built from a [`Network`] for a single query; it is not kept in sync with
/// later mutations of the network.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<AirportId, Vec<Edge>>,
    skipped_flights: usize,
}

impl Graph {
    /// Return the outgoing edges for a given airport identifier.
    pub fn neighbours(&self, airport: &str) -> &[Edge] {
        self.adjacency
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the airport is a node of this graph.
    pub fn contains(&self, airport: &str) -> bool {
        self.adjacency.contains_key(airport)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Flights left out because their cost was negative or not finite.
    pub fn skipped_flights(&self) -> usize {
        self.skipped_flights
    }
}

/// Build the routing graph for the network's current flights, weighting each
/// edge with `cost_model`.
///
/// Every airport becomes a node, including airports without departures. Edges
/// whose cost is negative or not finite are skipped since they would break
/// the shortest-path search.
pub fn build_graph<C: CostModel>(network: &Network, cost_model: &C) -> Graph {
    let mut adjacency: HashMap<AirportId, Vec<Edge>> = network
        .airports()
        .map(|airport| (airport.id.clone(), Vec::new()))
        .collect();

    let mut skipped_edges = 0usize;
    for flight in network.flights() {
        let (Some(from), Some(to)) = (
            network.airport(flight.from.as_str()),
            network.airport(flight.to.as_str()),
        ) else {
            skipped_edges += 1;
            continue;
        };

        let cost = cost_model.flight_cost(from, to, flight.aircraft);
        if !cost.is_finite() || cost < 0.0 {
            skipped_edges += 1;
            continue;
        }

        adjacency.entry(from.id.clone()).or_default().push(Edge {
            target: to.id.clone(),
            aircraft: flight.aircraft,
            cost,
        });
    }

    if skipped_edges > 0 {
        warn!(skipped_edges, "ignored flights with unusable costs");
    }

    let graph = Graph {
        adjacency,
        skipped_flights: skipped_edges,
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built routing graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::Airport;
    use crate::cost::SizeClassCost;
    use crate::flight::Flight;

    struct NegativeCost;

    impl CostModel for NegativeCost {
        fn flight_cost(&self, _: &Airport, _: &Airport, _: SizeClass) -> f64 {
            -1.0
        }
    }

    fn network() -> Network {
        let mut network = Network::new();
        network
            .add_airport(Airport::parse("AAA", &[0.0, 0.0], "M").unwrap())
            .unwrap();
        network
            .add_airport(Airport::parse("BBB", &[3.0, 4.0], "M").unwrap())
            .unwrap();
        network
            .add_airport(Airport::parse("CCC", &[9.0, 9.0], "S").unwrap())
            .unwrap();
        let a = AirportId::new("AAA").unwrap();
        let b = AirportId::new("BBB").unwrap();
        network
            .add_flight(Flight::new(a.clone(), b.clone(), SizeClass::Large))
            .unwrap();
        network
            .add_flight(Flight::new(a, b, SizeClass::Small))
            .unwrap();
        network
    }

    #[test]
    fn every_airport_is_a_node() {
        let graph = build_graph(&network(), &SizeClassCost);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.skipped_flights(), 0);
        assert!(graph.contains("CCC"));
        assert!(graph.neighbours("CCC").is_empty());
        assert!(graph.neighbours("ZZZ").is_empty());
    }

    #[test]
    fn parallel_flights_become_separate_edges() {
        let graph = build_graph(&network(), &SizeClassCost);
        let edges = graph.neighbours("AAA");
        assert_eq!(edges.len(), 2);
        // 5 * 1.5 * 2 and 5 * 0.8 * 2
        assert_eq!(edges[0].aircraft, SizeClass::Large);
        assert!((edges[0].cost - 15.0).abs() < 1e-9);
        assert_eq!(edges[1].aircraft, SizeClass::Small);
        assert!((edges[1].cost - 8.0).abs() < 1e-9);
        assert!(graph.neighbours("BBB").is_empty());
    }

    #[test]
    fn negative_costs_are_skipped() {
        let graph = build_graph(&network(), &NegativeCost);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.skipped_flights(), 2);
        assert_eq!(graph.node_count(), 3);
    }
}
