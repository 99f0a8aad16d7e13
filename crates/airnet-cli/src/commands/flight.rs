//! Flight subcommand handlers.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use airnet_lib::{AirportId, Flight, Network, SizeClass, SizeClassCost};

use super::{friendly_error, load, save};
use crate::output::{
    flight_added_text, flight_removed_text, flights_text, FlightListing, FlightRemoval,
    OutputFormat,
};

/// Arguments identifying a flight.
#[derive(Debug, Clone)]
pub struct FlightArgs {
    pub from: String,
    pub to: String,
    pub aircraft: SizeClass,
}

impl FlightArgs {
    fn to_flight(&self) -> Result<Flight> {
        Ok(Flight::new(
            AirportId::new(self.from.as_str()).map_err(friendly_error)?,
            AirportId::new(self.to.as_str()).map_err(friendly_error)?,
            self.aircraft,
        ))
    }
}

/// Add a flight between two existing airports.
pub fn handle_flight_add(db_path: &Path, format: OutputFormat, args: &FlightArgs) -> Result<()> {
    let mut network = load(db_path)?;
    let flight = args.to_flight()?;
    network.add_flight(flight.clone()).map_err(friendly_error)?;
    save(db_path, &network)?;
    info!(%flight, "flight added");

    let listing = listing(&network, flight)?;
    print!("{}", format.render(&listing, flight_added_text)?);
    Ok(())
}

/// Remove the first flight matching the arguments. Missing flights are
/// reported but are not an error.
pub fn handle_flight_remove(
    db_path: &Path,
    format: OutputFormat,
    args: &FlightArgs,
) -> Result<()> {
    let mut network = load(db_path)?;
    let flight = args.to_flight()?;
    let removed = network.remove_flight(&flight);
    if removed {
        save(db_path, &network)?;
        info!(%flight, "flight removed");
    }

    let removal = FlightRemoval { flight, removed };
    print!("{}", format.render(&removal, flight_removed_text)?);
    Ok(())
}

/// List every flight in insertion order with its cost.
pub fn handle_flight_list(db_path: &Path, format: OutputFormat) -> Result<()> {
    let network = load(db_path)?;
    let listings = network
        .flights()
        .iter()
        .cloned()
        .map(|flight| listing(&network, flight))
        .collect::<Result<Vec<_>>>()?;
    print!("{}", format.render(listings.as_slice(), flights_text)?);
    Ok(())
}

fn listing(network: &Network, flight: Flight) -> Result<FlightListing> {
    let cost = network
        .flight_cost(&SizeClassCost, &flight)
        .map_err(friendly_error)?;
    Ok(FlightListing { flight, cost })
}
