use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::airport::{AirportId, SizeClass};
use crate::graph::Graph;

/// The edge through which the search reached an airport.
#[derive(Debug, Clone, PartialEq)]
pub struct Predecessor {
    pub from: AirportId,
    pub aircraft: SizeClass,
    pub cost: f64,
}

/// One hop of a reconstructed path.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub from: AirportId,
    pub to: AirportId,
    pub aircraft: SizeClass,
    pub cost: f64,
}

/// Final distances and predecessors of a single-source search.
///
/// Airports missing from the tree are unreachable from the source; lookups
/// report them as `None` instead of an infinite distance.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: AirportId,
    distances: HashMap<AirportId, f64>,
    parents: HashMap<AirportId, Predecessor>,
}

impl ShortestPathTree {
    pub fn source(&self) -> &AirportId {
        &self.source
    }

    /// Lowest total cost from the source, or `None` when unreachable.
    pub fn distance(&self, airport: &str) -> Option<f64> {
        self.distances.get(airport).copied()
    }

    pub fn is_reachable(&self, airport: &str) -> bool {
        self.distances.contains_key(airport)
    }

    /// Number of airports reachable from the source, including the source.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn predecessor(&self, airport: &str) -> Option<&Predecessor> {
        self.parents.get(airport)
    }

    /// Airports from the source to `goal` inclusive.
    pub fn path_to(&self, goal: &str) -> Option<Vec<AirportId>> {
        let hops = self.hops_to(goal)?;
        let mut path = Vec::with_capacity(hops.len() + 1);
        path.push(self.source.clone());
        path.extend(hops.into_iter().map(|hop| hop.to));
        Some(path)
    }

    /// Hops from the source to `goal`; empty when `goal` is the source.
    pub fn hops_to(&self, goal: &str) -> Option<Vec<Hop>> {
        if !self.is_reachable(goal) {
            return None;
        }

        let mut hops = Vec::new();
        let mut current = self.distances.get_key_value(goal)?.0.clone();
        while current != self.source {
            let parent = self.predecessor(current.as_str())?;
            hops.push(Hop {
                from: parent.from.clone(),
                to: current,
                aircraft: parent.aircraft,
                cost: parent.cost,
            });
            current = parent.from.clone();
        }
        hops.reverse();
        Some(hops)
    }
}

/// Run Dijkstra's algorithm from `start` over the whole graph.
///
/// The frontier is a binary heap without decrease-key: improved distances are
/// pushed as new entries and stale ones are skipped when popped. The search
/// only stops once the frontier is empty, so every reachable airport ends up
/// with its final distance.
pub fn shortest_path_tree(graph: &Graph, start: &AirportId) -> ShortestPathTree {
    let mut distances: HashMap<AirportId, f64> = HashMap::new();
    let mut parents: HashMap<AirportId, Predecessor> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.clone(), 0.0);
    queue.push(QueueEntry::new(start.clone(), 0.0));

    let mut settled = 0usize;
    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(&entry.node) {
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };
        settled += 1;

        for edge in graph.neighbours(entry.node.as_str()) {
            let next_cost = current_distance + edge.cost;
            let known = distances
                .get(&edge.target)
                .copied()
                .unwrap_or(f64::INFINITY);
            if next_cost < known {
                distances.insert(edge.target.clone(), next_cost);
                parents.insert(
                    edge.target.clone(),
                    Predecessor {
                        from: entry.node.clone(),
                        aircraft: edge.aircraft,
                        cost: edge.cost,
                    },
                );
                queue.push(QueueEntry::new(edge.target.clone(), next_cost));
            }
        }
    }

    debug!(
        source = %start,
        settled,
        reachable = distances.len(),
        "completed shortest-path search"
    );

    ShortestPathTree {
        source: start.clone(),
        distances,
        parents,
    }
}

/// Find the lowest-cost path between `start` and `goal`.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: &AirportId,
    goal: &AirportId,
) -> Option<Vec<AirportId>> {
    shortest_path_tree(graph, start).path_to(goal.as_str())
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: AirportId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: AirportId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::Airport;
    use crate::cost::SizeClassCost;
    use crate::flight::Flight;
    use crate::graph::build_graph;
    use crate::network::Network;

    fn id(value: &str) -> AirportId {
        AirportId::new(value).unwrap()
    }

    /// Diamond where the two-hop detour through BBB beats the direct flight.
    fn diamond() -> Graph {
        let mut network = Network::new();
        for (code, x, y) in [
            ("AAA", 0.0, 0.0),
            ("BBB", 0.0, 3.0),
            ("CCC", 4.0, 3.0),
            ("DDD", 9.0, 9.0),
        ] {
            network
                .add_airport(Airport::parse(code, &[x, y], "M").unwrap())
                .unwrap();
        }
        for (from, to, aircraft) in [
            ("AAA", "CCC", SizeClass::Large),
            ("AAA", "BBB", SizeClass::Small),
            ("BBB", "CCC", SizeClass::Small),
        ] {
            network
                .add_flight(Flight::new(id(from), id(to), aircraft))
                .unwrap();
        }
        build_graph(&network, &SizeClassCost)
    }

    #[test]
    fn prefers_cheaper_multi_hop_path() {
        let graph = diamond();
        let tree = shortest_path_tree(&graph, &id("AAA"));

        // direct: 5 * 1.5 * 2 = 15; detour: 3 * 0.8 * 2 + 4 * 0.8 * 2 = 11.2
        let cost = tree.distance("CCC").expect("reachable");
        assert!((cost - 11.2).abs() < 1e-9);
        assert_eq!(
            tree.path_to("CCC").unwrap(),
            vec![id("AAA"), id("BBB"), id("CCC")]
        );

        let hops = tree.hops_to("CCC").unwrap();
        assert_eq!(hops.len(), 2);
        assert!(hops.iter().all(|hop| hop.aircraft == SizeClass::Small));
    }

    #[test]
    fn unreachable_airports_have_no_distance() {
        let graph = diamond();
        let tree = shortest_path_tree(&graph, &id("AAA"));
        assert_eq!(tree.distance("DDD"), None);
        assert!(tree.path_to("DDD").is_none());
        assert!(tree.hops_to("DDD").is_none());
        assert_eq!(tree.reachable_count(), 3);
    }

    #[test]
    fn source_is_reachable_at_zero_cost() {
        let graph = diamond();
        let tree = shortest_path_tree(&graph, &id("AAA"));
        assert_eq!(tree.distance("AAA"), Some(0.0));
        assert_eq!(tree.path_to("AAA").unwrap(), vec![id("AAA")]);
        assert!(tree.hops_to("AAA").unwrap().is_empty());
        assert!(tree.predecessor("AAA").is_none());
    }

    #[test]
    fn distances_are_non_decreasing_along_path() {
        let graph = diamond();
        let tree = shortest_path_tree(&graph, &id("AAA"));
        let path = tree.path_to("CCC").unwrap();
        let costs: Vec<f64> = path
            .iter()
            .map(|node| tree.distance(node.as_str()).unwrap())
            .collect();
        assert!(costs.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn find_route_matches_tree() {
        let graph = diamond();
        assert_eq!(
            find_route_dijkstra(&graph, &id("AAA"), &id("CCC")),
            Some(vec![id("AAA"), id("BBB"), id("CCC")])
        );
        assert_eq!(find_route_dijkstra(&graph, &id("CCC"), &id("AAA")), None);
    }

    #[test]
    fn queue_entry_orders_by_lowest_cost() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(id("BBB"), 5.0));
        heap.push(QueueEntry::new(id("AAA"), 1.0));
        heap.push(QueueEntry::new(id("CCC"), 3.0));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|entry| entry.node)
            .collect();
        assert_eq!(order, vec![id("AAA"), id("CCC"), id("BBB")]);
    }
}
