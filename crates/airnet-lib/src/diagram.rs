//! Graphviz export of a network.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::airport::AirportId;
use crate::cost::CostModel;
use crate::error::Result;
use crate::network::Network;

const HIGHLIGHT_COLOR: &str = "red";

/// Options controlling [`render_dot`].
#[derive(Debug, Clone, Default)]
pub struct DiagramOptions {
    /// Graph name written after `digraph`.
    pub name: Option<String>,
    /// Ordered airports of a route to draw in bold.
    pub highlight: Vec<AirportId>,
}

impl DiagramOptions {
    pub fn highlighting(route: &[AirportId]) -> Self {
        Self {
            name: None,
            highlight: route.to_vec(),
        }
    }
}

/// Render the network as a Graphviz `digraph`.
///
/// Nodes are airports, edges are flights labelled with their cost and
/// aircraft class. Airports on the highlighted route and every flight joining
/// two consecutive route airports are drawn bold.
pub fn render_dot<C: CostModel>(
    network: &Network,
    cost_model: &C,
    options: &DiagramOptions,
) -> String {
    let on_route: HashSet<&str> = options.highlight.iter().map(AirportId::as_str).collect();
    let route_pairs: HashSet<(&str, &str)> = options
        .highlight
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();

    let mut buffer = String::new();
    let name = options.name.as_deref().unwrap_or("airnet");
    let _ = writeln!(buffer, "digraph \"{}\" {{", escape(name));
    let _ = writeln!(buffer, "    rankdir=LR;");

    for airport in network.airports() {
        let id = airport.id.as_str();
        let style = if on_route.contains(id) {
            format!(", color={HIGHLIGHT_COLOR}, penwidth=2")
        } else {
            String::new()
        };
        let _ = writeln!(
            buffer,
            "    \"{id}\" [label=\"{id}\\n({class})\"{style}];",
            id = escape(id),
            class = airport.class,
        );
    }

    for flight in network.flights() {
        let (Some(from), Some(to)) = (
            network.airport(flight.from.as_str()),
            network.airport(flight.to.as_str()),
        ) else {
            continue;
        };
        let cost = cost_model.flight_cost(from, to, flight.aircraft);
        let style = if route_pairs.contains(&(from.id.as_str(), to.id.as_str())) {
            format!(", color={HIGHLIGHT_COLOR}, penwidth=2")
        } else {
            String::new()
        };
        let _ = writeln!(
            buffer,
            "    \"{from}\" -> \"{to}\" [label=\"{cost:.2} ({aircraft})\"{style}];",
            from = escape(from.id.as_str()),
            to = escape(to.id.as_str()),
            aircraft = flight.aircraft.letter(),
        );
    }

    buffer.push_str("}\n");
    buffer
}

/// Render the network and write the diagram to `path`.
pub fn write_dot<C: CostModel>(
    path: &Path,
    network: &Network,
    cost_model: &C,
    options: &DiagramOptions,
) -> Result<()> {
    let dot = render_dot(network, cost_model, options);
    fs::write(path, dot)?;
    debug!(path = %path.display(), "wrote network diagram");
    Ok(())
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
