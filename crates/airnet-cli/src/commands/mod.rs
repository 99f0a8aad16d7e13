//! Handlers for the `airnet` subcommands.
//!
//! Each handler loads the network from the database, runs one operation and
//! prints the result in the requested [`OutputFormat`](crate::output::OutputFormat).
//! Mutating handlers save the network back before reporting success.

pub mod airport;
pub mod diagram;
pub mod flight;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use airnet_lib::{load_network, save_network, Error as LibError, Network};

pub(crate) fn load(db_path: &Path) -> Result<Network> {
    load_network(db_path)
        .with_context(|| format!("failed to load network from {}", db_path.display()))
}

pub(crate) fn save(db_path: &Path, network: &Network) -> Result<()> {
    save_network(db_path, network)
        .with_context(|| format!("failed to save network to {}", db_path.display()))
}

/// Turn library errors users can act on into plain sentences.
pub(crate) fn friendly_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownAirport { id, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&id, &suggestions))
        }
        LibError::DuplicateAirport { id } => {
            anyhow::anyhow!("Airport '{id}' already exists. Use `airport update` to change it.")
        }
        LibError::RouteNotFound { start, goal } => anyhow::anyhow!(
            "No route found between {start} and {goal}. Add flights connecting them and try again."
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(id: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{id}'.");
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}
