//! SQLite persistence for networks.
//!
//! Stored rows are always replayed through [`Network::add_airport`] and
//! [`Network::add_flight`], so a database can never produce a network that
//! the in-memory operations would have rejected.

use std::path::Path;

use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::airport::{Airport, AirportId, Location, SizeClass};
use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::network::Network;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS airports (
    id TEXT PRIMARY KEY NOT NULL,
    x REAL NOT NULL,
    y REAL NOT NULL,
    class TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS flights (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    origin TEXT NOT NULL,
    destination TEXT NOT NULL,
    aircraft TEXT NOT NULL
);
"#;

/// Raw airport row before validation.
struct AirportRow {
    id: String,
    x: f64,
    y: f64,
    class: String,
}

/// Raw flight row before validation.
struct FlightRow {
    origin: String,
    destination: String,
    aircraft: String,
}

/// Open (creating if needed) the database and make sure the schema exists.
pub fn open_store(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let connection = Connection::open(db_path)?;
    connection.execute_batch(SCHEMA)?;
    Ok(connection)
}

/// Load the network stored at `db_path`. A new database yields an empty
/// network.
pub fn load_network(db_path: &Path) -> Result<Network> {
    let connection = open_store(db_path)?;
    let network = read_network(&connection)?;
    debug!(
        path = %db_path.display(),
        airports = network.len(),
        flights = network.flight_count(),
        "loaded network"
    );
    Ok(network)
}

/// Replace the stored contents with `network` in a single transaction.
pub fn save_network(db_path: &Path, network: &Network) -> Result<()> {
    let mut connection = open_store(db_path)?;
    write_network(&mut connection, network)?;
    debug!(
        path = %db_path.display(),
        airports = network.len(),
        flights = network.flight_count(),
        "saved network"
    );
    Ok(())
}

/// Build a network from an open connection.
pub fn read_network(connection: &Connection) -> Result<Network> {
    let mut network = Network::new();

    let mut stmt = connection.prepare("SELECT id, x, y, class FROM airports ORDER BY id")?;
    let rows = stmt.query_map([], row_to_airport)?;
    for row in rows {
        let row = row?;
        let airport = Airport::new(
            AirportId::new(row.id)?,
            Location::new(row.x, row.y)?,
            row.class.parse()?,
        );
        network.add_airport(airport)?;
    }

    let mut stmt =
        connection.prepare("SELECT origin, destination, aircraft FROM flights ORDER BY seq")?;
    let rows = stmt.query_map([], row_to_flight)?;
    for row in rows {
        let row = row?;
        let flight = Flight::new(
            AirportId::new(row.origin)?,
            AirportId::new(row.destination)?,
            row.aircraft.parse::<SizeClass>()?,
        );
        network.add_flight(flight).map_err(|err| Error::CorruptStore {
            message: format!("flight references a missing airport ({err})"),
        })?;
    }

    Ok(network)
}

/// Overwrite the stored tables with `network`.
pub fn write_network(connection: &mut Connection, network: &Network) -> Result<()> {
    let tx = connection.transaction()?;
    tx.execute("DELETE FROM flights", [])?;
    tx.execute("DELETE FROM airports", [])?;
    {
        let mut insert_airport =
            tx.prepare("INSERT INTO airports (id, x, y, class) VALUES (?1, ?2, ?3, ?4)")?;
        for airport in network.airports() {
            insert_airport.execute(params![
                airport.id.as_str(),
                airport.location.x,
                airport.location.y,
                airport.class.letter().to_string(),
            ])?;
        }

        let mut insert_flight = tx
            .prepare("INSERT INTO flights (origin, destination, aircraft) VALUES (?1, ?2, ?3)")?;
        for flight in network.flights() {
            insert_flight.execute(params![
                flight.from.as_str(),
                flight.to.as_str(),
                flight.aircraft.letter().to_string(),
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

fn row_to_airport(row: &Row<'_>) -> rusqlite::Result<AirportRow> {
    Ok(AirportRow {
        id: row.get(0)?,
        x: row.get(1)?,
        y: row.get(2)?,
        class: row.get(3)?,
    })
}

fn row_to_flight(row: &Row<'_>) -> rusqlite::Result<FlightRow> {
    Ok(FlightRow {
        origin: row.get(0)?,
        destination: row.get(1)?,
        aircraft: row.get(2)?,
    })
}
