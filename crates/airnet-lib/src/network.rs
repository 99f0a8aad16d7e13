use std::collections::BTreeMap;

use tracing::debug;

use crate::airport::{Airport, AirportId, Location, SizeClass};
use crate::cost::CostModel;
use crate::error::{Error, Result};
use crate::flight::Flight;

/// Minimum normalized Damerau-Levenshtein similarity for an id to be offered
/// as a suggestion. One substitution or one transposition in a three-letter id
/// scores 2/3.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Maximum number of suggestions attached to an unknown-airport error.
const MAX_SUGGESTIONS: usize = 3;

/// Optional field changes applied by [`Network::update_airport`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AirportUpdate {
    pub location: Option<Location>,
    pub class: Option<SizeClass>,
}

impl AirportUpdate {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.class.is_none()
    }
}

/// Airports and the flights between them.
///
/// Every flight's endpoints refer to airports present in the network; the
/// mutating operations keep it that way and leave the network untouched when
/// they fail.
#[derive(Debug, Clone, Default)]
pub struct Network {
    airports: BTreeMap<AirportId, Airport>,
    flights: Vec<Flight>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Airports ordered by identifier.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Flights in insertion order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn airport(&self, id: &str) -> Option<&Airport> {
        self.airports.get(id)
    }

    pub fn contains_airport(&self, id: &str) -> bool {
        self.airports.contains_key(id)
    }

    /// Lookup an airport, failing with suggestions when it is absent.
    pub fn require_airport(&self, id: &str) -> Result<&Airport> {
        self.airports.get(id).ok_or_else(|| self.unknown_airport(id))
    }

    /// Flights departing from the given airport.
    pub fn departures<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Flight> + 'a {
        self.flights
            .iter()
            .filter(move |flight| flight.from.as_str() == id)
    }

    /// Insert a new airport.
    pub fn add_airport(&mut self, airport: Airport) -> Result<()> {
        if self.airports.contains_key(&airport.id) {
            return Err(Error::DuplicateAirport {
                id: airport.id.to_string(),
            });
        }
        debug!(airport = %airport.id, "adding airport");
        self.airports.insert(airport.id.clone(), airport);
        Ok(())
    }

    /// Remove an airport and every flight that departs from or arrives at it.
    ///
    /// Returns the removed airport together with the cascaded flights.
    pub fn remove_airport(&mut self, id: &str) -> Result<(Airport, Vec<Flight>)> {
        let airport = self
            .airports
            .remove(id)
            .ok_or_else(|| self.unknown_airport(id))?;

        let (removed, kept): (Vec<Flight>, Vec<Flight>) = std::mem::take(&mut self.flights)
            .into_iter()
            .partition(|flight| flight.touches(id));
        self.flights = kept;

        debug!(
            airport = %airport.id,
            cascaded_flights = removed.len(),
            "removed airport"
        );
        Ok((airport, removed))
    }

    /// Apply the provided field changes to an existing airport.
    pub fn update_airport(&mut self, id: &str, update: AirportUpdate) -> Result<&Airport> {
        if !self.airports.contains_key(id) {
            return Err(self.unknown_airport(id));
        }
        if let Some(airport) = self.airports.get_mut(id) {
            if let Some(location) = update.location {
                airport.location = location;
            }
            if let Some(class) = update.class {
                airport.class = class;
            }
        }
        let airport = self.require_airport(id)?;
        debug!(airport = %airport.id, ?update, "updated airport");
        Ok(airport)
    }

    /// Append a flight whose endpoints both exist. Parallel flights between the
    /// same pair are allowed.
    pub fn add_flight(&mut self, flight: Flight) -> Result<()> {
        self.require_airport(flight.from.as_str())?;
        self.require_airport(flight.to.as_str())?;
        debug!(from = %flight.from, to = %flight.to, aircraft = %flight.aircraft, "adding flight");
        self.flights.push(flight);
        Ok(())
    }

    /// Remove the first flight equal to `flight`. Returns whether one was removed.
    pub fn remove_flight(&mut self, flight: &Flight) -> bool {
        match self.flights.iter().position(|candidate| candidate == flight) {
            Some(index) => {
                self.flights.remove(index);
                true
            }
            None => false,
        }
    }

    /// Cost of a flight under the given model, resolving both endpoints.
    pub fn flight_cost<C: CostModel>(&self, cost_model: &C, flight: &Flight) -> Result<f64> {
        let from = self.require_airport(flight.from.as_str())?;
        let to = self.require_airport(flight.to.as_str())?;
        Ok(cost_model.flight_cost(from, to, flight.aircraft))
    }

    /// Airport ids similar to `id`, most similar first.
    pub fn fuzzy_airport_matches(&self, id: &str, limit: usize) -> Vec<String> {
        let needle = id.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .keys()
            .map(|candidate| {
                let candidate = candidate.as_str();
                let score = strsim::normalized_damerau_levenshtein(
                    &needle,
                    &candidate.to_ascii_uppercase(),
                );
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    fn unknown_airport(&self, id: &str) -> Error {
        Error::UnknownAirport {
            id: id.to_string(),
            suggestions: self.fuzzy_airport_matches(id, MAX_SUGGESTIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::SizeClassCost;
    use crate::error::ErrorKind;

    fn id(value: &str) -> AirportId {
        AirportId::new(value).unwrap()
    }

    fn sample() -> Network {
        let mut network = Network::new();
        for (code, x, y) in [("AAA", 0.0, 0.0), ("BBB", 3.0, 4.0), ("CCC", 6.0, 8.0)] {
            network
                .add_airport(Airport::parse(code, &[x, y], "M").unwrap())
                .unwrap();
        }
        network
            .add_flight(Flight::new(id("AAA"), id("BBB"), SizeClass::Medium))
            .unwrap();
        network
            .add_flight(Flight::new(id("BBB"), id("CCC"), SizeClass::Medium))
            .unwrap();
        network
            .add_flight(Flight::new(id("CCC"), id("AAA"), SizeClass::Small))
            .unwrap();
        network
    }

    #[test]
    fn duplicate_airport_is_rejected_without_changes() {
        let mut network = sample();
        let err = network
            .add_airport(Airport::parse("AAA", &[9.0, 9.0], "L").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(network.len(), 3);
        assert_eq!(network.airport("AAA").unwrap().class, SizeClass::Medium);
    }

    #[test]
    fn removing_airport_cascades_flights() {
        let mut network = sample();
        let (airport, removed) = network.remove_airport("BBB").unwrap();
        assert_eq!(airport.id.as_str(), "BBB");
        assert_eq!(removed.len(), 2);
        assert!(network.flights().iter().all(|flight| !flight.touches("BBB")));
        assert_eq!(network.flight_count(), 1);
    }

    #[test]
    fn removing_unknown_airport_fails() {
        let mut network = sample();
        let err = network.remove_airport("ZZZ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(network.len(), 3);
        assert_eq!(network.flight_count(), 3);
    }

    #[test]
    fn update_applies_only_provided_fields() {
        let mut network = sample();
        let update = AirportUpdate {
            class: Some(SizeClass::Large),
            ..AirportUpdate::default()
        };
        let airport = network.update_airport("AAA", update).unwrap();
        assert_eq!(airport.class, SizeClass::Large);
        assert_eq!(airport.location, Location { x: 0.0, y: 0.0 });

        let update = AirportUpdate {
            location: Some(Location::new(1.0, 1.0).unwrap()),
            class: None,
        };
        let airport = network.update_airport("AAA", update).unwrap();
        assert_eq!(airport.class, SizeClass::Large);
        assert_eq!(airport.location, Location { x: 1.0, y: 1.0 });
    }

    #[test]
    fn flights_require_existing_endpoints() {
        let mut network = sample();
        let err = network
            .add_flight(Flight::new(id("AAA"), id("ZZZ"), SizeClass::Large))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(network.flight_count(), 3);
    }

    #[test]
    fn parallel_flights_are_kept_and_removed_one_at_a_time() {
        let mut network = sample();
        let flight = Flight::new(id("AAA"), id("BBB"), SizeClass::Medium);
        network.add_flight(flight.clone()).unwrap();
        assert_eq!(network.departures("AAA").count(), 2);

        assert!(network.remove_flight(&flight));
        assert_eq!(network.departures("AAA").count(), 1);
        assert!(network.remove_flight(&flight));
        assert!(!network.remove_flight(&flight));
    }

    #[test]
    fn flight_cost_resolves_endpoints() {
        let network = sample();
        let cost = network
            .flight_cost(&SizeClassCost, &network.flights()[0])
            .unwrap();
        assert_eq!(cost, 10.0);
    }

    #[test]
    fn unknown_airport_suggests_close_ids() {
        let mut network = Network::new();
        network
            .add_airport(Airport::parse("JFK", &[0.0, 0.0], "L").unwrap())
            .unwrap();
        network
            .add_airport(Airport::parse("LAX", &[5.0, 5.0], "L").unwrap())
            .unwrap();

        let err = network.require_airport("JKF").unwrap_err();
        match err {
            Error::UnknownAirport { suggestions, .. } => {
                assert_eq!(suggestions, vec!["JFK".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn suggestions_cover_one_letter_typos_only() {
        let mut network = Network::new();
        for code in ["JFK", "JFA", "LAX"] {
            network
                .add_airport(Airport::parse(code, &[0.0, 0.0], "M").unwrap())
                .unwrap();
        }

        assert_eq!(network.fuzzy_airport_matches("JFX", 3), vec!["JFA", "JFK"]);
        assert_eq!(network.fuzzy_airport_matches("lax", 3), vec!["LAX"]);
        assert_eq!(network.fuzzy_airport_matches("XAL", 3), Vec::<String>::new());
        assert_eq!(network.fuzzy_airport_matches("JFX", 1), vec!["JFA"]);
    }
}
