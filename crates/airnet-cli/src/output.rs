//! Output formatting for CLI results.
//!
//! Every handler builds a serialisable value and hands it to
//! [`OutputFormat::render`] together with a text renderer, so JSON output is
//! always the structured form of what text mode prints.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use airnet_lib::{Airport, Flight, RouteRenderMode, RouteSummary};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Single-line routes; other results print as text.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render `value` as JSON or through the supplied text renderer.
    pub fn render<T, F>(self, value: &T, text: F) -> Result<String>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self {
            OutputFormat::Text | OutputFormat::Basic => Ok(text(value)),
            OutputFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(value).context("failed to serialise output")?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Render a planned route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        let mode = match self {
            OutputFormat::Basic => RouteRenderMode::Compact,
            _ => RouteRenderMode::PlainText,
        };
        self.render(summary, |summary| summary.render(mode))
    }
}

/// A flight together with its cost under the active cost model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightListing {
    #[serde(flatten)]
    pub flight: Flight,
    pub cost: f64,
}

/// Result of removing an airport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRemoval {
    pub removed: Airport,
    pub cascaded_flights: Vec<Flight>,
}

/// Result of removing a flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRemoval {
    pub flight: Flight,
    pub removed: bool,
}

/// Result of exporting a diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramExport {
    pub path: String,
    pub airports: usize,
    pub flights: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlighted: Vec<String>,
}

pub fn airports_text(airports: &[Airport]) -> String {
    if airports.is_empty() {
        return "No airports.\n".to_string();
    }
    let mut buffer = String::new();
    for airport in airports {
        let _ = writeln!(
            buffer,
            "{} {} {}",
            airport.id, airport.location, airport.class
        );
    }
    buffer
}

pub fn flights_text(flights: &[FlightListing]) -> String {
    if flights.is_empty() {
        return "No flights.\n".to_string();
    }
    let mut buffer = String::new();
    for listing in flights {
        let _ = writeln!(buffer, "{}, cost {:.2}", listing.flight, listing.cost);
    }
    buffer
}

pub fn airport_added_text(airport: &Airport) -> String {
    format!("Added airport {airport}\n")
}

pub fn airport_updated_text(airport: &Airport) -> String {
    format!("Updated airport {airport}\n")
}

pub fn airport_removed_text(removal: &AirportRemoval) -> String {
    let mut buffer = format!(
        "Removed airport {} and {} flight(s)\n",
        removal.removed.id,
        removal.cascaded_flights.len()
    );
    for flight in &removal.cascaded_flights {
        let _ = writeln!(buffer, "  - {flight}");
    }
    buffer
}

pub fn flight_added_text(listing: &FlightListing) -> String {
    format!("Added flight {}, cost {:.2}\n", listing.flight, listing.cost)
}

pub fn flight_removed_text(removal: &FlightRemoval) -> String {
    if removal.removed {
        format!("Removed flight {}\n", removal.flight)
    } else {
        format!("No matching flight {}\n", removal.flight)
    }
}

pub fn diagram_text(export: &DiagramExport) -> String {
    let mut buffer = format!(
        "Wrote diagram of {} airport(s) and {} flight(s) to {}\n",
        export.airports, export.flights, export.path
    );
    if !export.highlighted.is_empty() {
        let _ = writeln!(buffer, "Highlighted route: {}", export.highlighted.join(" -> "));
    }
    buffer
}
