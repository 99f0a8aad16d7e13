//! Shared network fixtures for integration tests.

#![allow(dead_code)]

use airnet_lib::{Airport, AirportId, Flight, Network, SizeClass};

pub fn id(value: &str) -> AirportId {
    AirportId::new(value).expect("valid airport id")
}

pub fn airport(code: &str, x: f64, y: f64, class: &str) -> Airport {
    Airport::parse(code, &[x, y], class).expect("valid airport")
}

pub fn flight(from: &str, to: &str, aircraft: SizeClass) -> Flight {
    Flight::new(id(from), id(to), aircraft)
}

/// A(0,0) -> B(3,4) -> C(6,8), all medium airports flown by medium aircraft.
pub fn line_network() -> Network {
    let mut network = Network::new();
    network.add_airport(airport("AAA", 0.0, 0.0, "M")).unwrap();
    network.add_airport(airport("BBB", 3.0, 4.0, "M")).unwrap();
    network.add_airport(airport("CCC", 6.0, 8.0, "M")).unwrap();
    network
        .add_flight(flight("AAA", "BBB", SizeClass::Medium))
        .unwrap();
    network
        .add_flight(flight("BBB", "CCC", SizeClass::Medium))
        .unwrap();
    network
}

/// Mixed-size network with a hub, parallel services, a return leg and an
/// isolated airport (`ISO`).
pub fn hub_network() -> Network {
    let mut network = Network::new();
    for (code, x, y, class) in [
        ("HUB", 0.0, 0.0, "L"),
        ("NTH", 0.0, 10.0, "M"),
        ("EST", 10.0, 0.0, "S"),
        ("STH", 0.0, -10.0, "M"),
        ("WST", -10.0, 0.0, "S"),
        ("ISO", 50.0, 50.0, "S"),
    ] {
        network.add_airport(airport(code, x, y, class)).unwrap();
    }
    for (from, to, aircraft) in [
        ("HUB", "NTH", SizeClass::Large),
        ("HUB", "NTH", SizeClass::Small),
        ("HUB", "EST", SizeClass::Medium),
        ("NTH", "EST", SizeClass::Small),
        ("EST", "STH", SizeClass::Medium),
        ("STH", "WST", SizeClass::Small),
        ("WST", "HUB", SizeClass::Medium),
        ("NTH", "HUB", SizeClass::Large),
    ] {
        network.add_flight(flight(from, to, aircraft)).unwrap();
    }
    network
}
