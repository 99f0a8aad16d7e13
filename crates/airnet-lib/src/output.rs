use std::fmt::Write;

use serde::Serialize;

use crate::airport::{AirportId, Location, SizeClass};
use crate::error::{Error, Result};
use crate::network::Network;
use crate::routing::{Route, RouteLeg};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// One line per airport with the flight that reached it.
    PlainText,
    /// Single `AAA -> BBB -> CCC` line.
    Compact,
}

/// Airport visited by a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: AirportId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<SizeClass>,
    /// Cost accumulated on arrival at this airport.
    pub cumulative_cost: f64,
}

/// Structured representation of a planned route that front ends can
/// serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: AirportId,
    pub goal: AirportId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<AirportId>,
    pub hops: usize,
    pub total_cost: f64,
    pub steps: Vec<RouteStep>,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary annotated with airport details.
    pub fn from_route(network: &Network, route: &Route, via: Option<&str>) -> Result<Self> {
        let (Some(start), Some(goal)) = (route.start(), route.goal()) else {
            return Err(Error::EmptyRoute);
        };

        let mut cumulative_cost = 0.0;
        let mut steps = Vec::with_capacity(route.steps.len());
        for (index, id) in route.steps.iter().enumerate() {
            if index > 0 {
                if let Some(leg) = route.legs.get(index - 1) {
                    cumulative_cost += leg.cost;
                }
            }
            let airport = network.airport(id.as_str());
            steps.push(RouteStep {
                index,
                id: id.clone(),
                location: airport.map(|airport| airport.location),
                class: airport.map(|airport| airport.class),
                cumulative_cost,
            });
        }

        let via = match via {
            Some(stop) => Some(network.require_airport(stop)?.id.clone()),
            None => None,
        };

        Ok(Self {
            start: start.clone(),
            goal: goal.clone(),
            via,
            hops: route.hop_count(),
            total_cost: route.total_cost,
            steps,
            legs: route.legs.clone(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn header(&self) -> String {
        let via = self
            .via
            .as_ref()
            .map(|stop| format!(" via {stop}"))
            .unwrap_or_default();
        format!(
            "Route: {} -> {}{} ({} flights, cost {:.2})",
            self.start, self.goal, via, self.hops, self.total_cost
        )
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.header());
        for step in &self.steps {
            let flight = step
                .index
                .checked_sub(1)
                .and_then(|leg| self.legs.get(leg))
                .map(|leg| format!(" [{} aircraft, +{:.2}]", leg.aircraft, leg.cost))
                .unwrap_or_default();
            let _ = writeln!(
                buffer,
                "{:>3}: {}{} (cumulative {:.2})",
                step.index, step.id, flight, step.cumulative_cost
            );
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let joined = self
            .steps
            .iter()
            .map(|step| step.id.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{joined} ({:.2})\n", self.total_cost)
    }
}
