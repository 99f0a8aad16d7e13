use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Number of characters in an airport identifier.
pub const AIRPORT_ID_LEN: usize = 3;

/// Size class shared by airports and aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    /// Cost multiplier applied for this class, both as an aircraft and as an
    /// airport endpoint.
    pub fn multiplier(self) -> f64 {
        match self {
            SizeClass::Large => 1.5,
            SizeClass::Medium => 1.0,
            SizeClass::Small => 0.8,
        }
    }

    /// Single-letter code used in storage and on the command line.
    pub fn letter(self) -> char {
        match self {
            SizeClass::Large => 'L',
            SizeClass::Medium => 'M',
            SizeClass::Small => 'S',
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SizeClass::Large => "large",
            SizeClass::Medium => "medium",
            SizeClass::Small => "small",
        };
        f.write_str(value)
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    /// Accepts `L`/`M`/`S` or the full class name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "large" => Ok(SizeClass::Large),
            "m" | "medium" => Ok(SizeClass::Medium),
            "s" | "small" => Ok(SizeClass::Small),
            _ => Err(Error::InvalidSizeClass {
                value: s.to_string(),
            }),
        }
    }
}

/// Validated three-character airport identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AirportId(String);

impl AirportId {
    /// Validate and wrap an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.chars().count() != AIRPORT_ID_LEN {
            return Err(Error::InvalidAirportId { id });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AirportId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Borrow<str> for AirportId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AirportId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Planar coordinates of an airport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Create a location, rejecting NaN and infinite components.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::invalid_location(
                format!("{x},{y}"),
                "coordinates must be finite numbers",
            ));
        }
        Ok(Self { x, y })
    }

    /// Build a location from a coordinate slice of arity two.
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        match coords {
            [x, y] => Self::new(*x, *y),
            _ => Err(Error::invalid_location(
                format!("{coords:?}"),
                format!("expected 2 coordinates, got {}", coords.len()),
            )),
        }
    }

    /// Calculate the Euclidean distance to another location.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Location {
    type Err = Error;

    /// Parse `"x,y"`; surrounding whitespace and parentheses are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let coords = trimmed
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| Error::invalid_location(s, format!("'{part}' is not a number")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_slice(&coords)
    }
}

/// Node of the air network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub id: AirportId,
    pub location: Location,
    pub class: SizeClass,
}

impl Airport {
    pub fn new(id: AirportId, location: Location, class: SizeClass) -> Self {
        Self {
            id,
            location,
            class,
        }
    }

    /// Validate raw inputs and build an airport.
    pub fn parse(id: &str, coords: &[f64], class: &str) -> Result<Self> {
        Ok(Self {
            id: AirportId::new(id)?,
            location: Location::from_slice(coords)?,
            class: class.parse()?,
        })
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} ({})", self.id, self.location, self.class)
    }
}
