use std::fmt;

use serde::Serialize;

use crate::airport::{AirportId, SizeClass};

/// Directed service between two airports of a network.
///
/// Endpoints are airport identifiers resolved through the owning
/// [`Network`](crate::Network); a flight never owns its airports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Flight {
    pub from: AirportId,
    pub to: AirportId,
    pub aircraft: SizeClass,
}

impl Flight {
    pub fn new(from: AirportId, to: AirportId, aircraft: SizeClass) -> Self {
        Self { from, to, aircraft }
    }

    /// Whether either endpoint is the given airport.
    pub fn touches(&self, id: &str) -> bool {
        self.from.as_str() == id || self.to.as_str() == id
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} aircraft)", self.from, self.to, self.aircraft)
    }
}
