//! Airport subcommand handlers.

use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use airnet_lib::{Airport, AirportId, AirportUpdate, Location, SizeClass};

use super::{friendly_error, load, save};
use crate::output::{
    airport_added_text, airport_removed_text, airport_updated_text, airports_text,
    AirportRemoval, OutputFormat,
};

/// Insert a new airport.
pub fn handle_airport_add(
    db_path: &Path,
    format: OutputFormat,
    id: &str,
    location: Location,
    class: SizeClass,
) -> Result<()> {
    let mut network = load(db_path)?;
    let airport = Airport::new(AirportId::new(id).map_err(friendly_error)?, location, class);
    network
        .add_airport(airport.clone())
        .map_err(friendly_error)?;
    save(db_path, &network)?;
    info!(id = %airport.id, "airport added");

    print!("{}", format.render(&airport, airport_added_text)?);
    Ok(())
}

/// Remove an airport and every flight touching it.
pub fn handle_airport_remove(db_path: &Path, format: OutputFormat, id: &str) -> Result<()> {
    let mut network = load(db_path)?;
    let (removed, cascaded_flights) = network.remove_airport(id).map_err(friendly_error)?;
    save(db_path, &network)?;
    info!(id = %removed.id, flights = cascaded_flights.len(), "airport removed");

    let removal = AirportRemoval {
        removed,
        cascaded_flights,
    };
    print!("{}", format.render(&removal, airport_removed_text)?);
    Ok(())
}

/// Change the location and/or size class of an airport.
pub fn handle_airport_update(
    db_path: &Path,
    format: OutputFormat,
    id: &str,
    update: AirportUpdate,
) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update for airport '{id}'. Pass --location and/or --class.");
    }
    let mut network = load(db_path)?;
    let airport = network
        .update_airport(id, update)
        .map_err(friendly_error)?
        .clone();
    save(db_path, &network)?;
    info!(id = %airport.id, "airport updated");

    print!("{}", format.render(&airport, airport_updated_text)?);
    Ok(())
}

/// List every airport ordered by id.
pub fn handle_airport_list(db_path: &Path, format: OutputFormat) -> Result<()> {
    let network = load(db_path)?;
    let airports: Vec<Airport> = network.airports().cloned().collect();
    print!("{}", format.render(airports.as_slice(), airports_text)?);
    Ok(())
}
