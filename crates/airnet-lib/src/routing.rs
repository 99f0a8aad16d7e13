//! Route planning over a [`Network`].
//!
//! [`Router`] answers single-leg and via-stop queries for any [`CostModel`];
//! [`plan_route`] is the high-level entry point used by front ends and runs
//! with the standard [`SizeClassCost`] model.
//!
//! Unreachable destinations are reported as [`Error::RouteNotFound`], or as
//! [`Error::UnusableFlightCosts`] when flights were dropped for costs the
//! search cannot use (for example a distance that overflows to infinity); a
//! [`Route`] therefore always starts at the requested origin, ends at the
//! requested destination and carries a finite cost.

use serde::Serialize;
use tracing::debug;

use crate::airport::{AirportId, SizeClass};
use crate::cost::{CostModel, SizeClassCost};
use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::network::Network;
use crate::path::{shortest_path_tree, Hop, ShortestPathTree};

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    /// Intermediate airport the route must pass through.
    pub via: Option<String>,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            via: None,
        }
    }

    /// Require the route to stop at `stop`.
    pub fn via(mut self, stop: impl Into<String>) -> Self {
        self.via = Some(stop.into());
        self
    }
}

/// A single flight taken along a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: AirportId,
    pub to: AirportId,
    pub aircraft: SizeClass,
    pub cost: f64,
}

impl From<Hop> for RouteLeg {
    fn from(hop: Hop) -> Self {
        Self {
            from: hop.from,
            to: hop.to,
            aircraft: hop.aircraft,
            cost: hop.cost,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Airports from origin to destination inclusive.
    pub steps: Vec<AirportId>,
    /// Flights taken; one fewer than `steps`.
    pub legs: Vec<RouteLeg>,
    pub total_cost: f64,
}

impl Route {
    /// Number of flights in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&AirportId> {
        self.steps.first()
    }

    pub fn goal(&self) -> Option<&AirportId> {
        self.steps.last()
    }

    /// Append `next`, which must start where this route ends. The shared
    /// junction airport appears once and the costs are summed.
    fn join(mut self, next: Route) -> Route {
        self.steps.extend(next.steps.into_iter().skip(1));
        self.legs.extend(next.legs);
        self.total_cost += next.total_cost;
        self
    }
}

/// Computes routes over a borrowed network with a fixed cost model.
///
/// The network cannot change while a router borrows it, so every query sees a
/// stable set of airports and flights.
#[derive(Debug, Clone)]
pub struct Router<'a, C = SizeClassCost> {
    network: &'a Network,
    cost_model: C,
}

impl<'a> Router<'a, SizeClassCost> {
    /// Router using the standard size-class cost model.
    pub fn new(network: &'a Network) -> Self {
        Self::with_cost_model(network, SizeClassCost)
    }
}

impl<'a, C: CostModel> Router<'a, C> {
    pub fn with_cost_model(network: &'a Network, cost_model: C) -> Self {
        Self {
            network,
            cost_model,
        }
    }

    /// Single-source search from `start` over the current flights.
    pub fn shortest_paths(&self, start: &str) -> Result<ShortestPathTree> {
        let start = self.network.require_airport(start)?;
        let graph = build_graph(self.network, &self.cost_model);
        Ok(shortest_path_tree(&graph, &start.id))
    }

    /// Lowest-cost route from `start` to `goal`.
    ///
    /// Fails with [`Error::UnknownAirport`] when either endpoint is missing and
    /// with [`Error::RouteNotFound`] when no flights connect them. When the
    /// cost model produced unusable costs for some flights, an unreachable
    /// goal is reported as [`Error::UnusableFlightCosts`] instead.
    pub fn route(&self, start: &str, goal: &str) -> Result<Route> {
        let start_id = self.network.require_airport(start)?.id.clone();
        let goal_id = self.network.require_airport(goal)?.id.clone();
        let graph = build_graph(self.network, &self.cost_model);
        let tree = shortest_path_tree(&graph, &start_id);

        let (Some(hops), Some(total_cost)) =
            (tree.hops_to(goal_id.as_str()), tree.distance(goal_id.as_str()))
        else {
            let (start, goal) = (start.to_string(), goal.to_string());
            return Err(match graph.skipped_flights() {
                0 => Error::RouteNotFound { start, goal },
                skipped => Error::UnusableFlightCosts {
                    start,
                    goal,
                    skipped,
                },
            });
        };

        let mut steps = Vec::with_capacity(hops.len() + 1);
        steps.push(tree.source().clone());
        steps.extend(hops.iter().map(|hop| hop.to.clone()));

        debug!(start, goal, hops = hops.len(), total_cost, "planned route");
        Ok(Route {
            steps,
            legs: hops.into_iter().map(RouteLeg::from).collect(),
            total_cost,
        })
    }

    /// Route from `start` to `goal` that stops at `stop`.
    ///
    /// Both legs are optimised independently; the total cost is exactly the
    /// sum of the two leg costs.
    pub fn route_via(&self, start: &str, stop: &str, goal: &str) -> Result<Route> {
        for airport in [start, stop, goal] {
            self.network.require_airport(airport)?;
        }
        let first = self.route(start, stop)?;
        let second = self.route(stop, goal)?;
        Ok(first.join(second))
    }

    /// Dispatch a request to [`route`](Self::route) or
    /// [`route_via`](Self::route_via).
    pub fn plan(&self, request: &RouteRequest) -> Result<Route> {
        match request.via.as_deref() {
            Some(stop) => self.route_via(&request.start, stop, &request.goal),
            None => self.route(&request.start, &request.goal),
        }
    }
}

/// Compute a route using the standard cost model.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<Route> {
    Router::new(network).plan(request)
}
