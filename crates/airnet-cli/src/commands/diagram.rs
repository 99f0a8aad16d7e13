//! Diagram command handler exporting the network as Graphviz DOT.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use airnet_lib::{plan_route, write_dot, DiagramOptions, SizeClassCost};

use super::{friendly_error, load};
use super::route::RouteCommandArgs;
use crate::output::{diagram_text, DiagramExport, OutputFormat};

/// Arguments for the diagram command.
#[derive(Debug, Clone)]
pub struct DiagramCommandArgs {
    /// File the DOT text is written to.
    pub output: PathBuf,
    /// Route to highlight in the diagram.
    pub route: Option<RouteCommandArgs>,
}

/// Handle the diagram subcommand.
pub fn handle_diagram_command(
    db_path: &Path,
    format: OutputFormat,
    args: &DiagramCommandArgs,
) -> Result<()> {
    let network = load(db_path)?;

    let options = match &args.route {
        Some(route_args) => {
            let route = plan_route(&network, &route_args.to_request()).map_err(friendly_error)?;
            DiagramOptions::highlighting(&route.steps)
        }
        None => DiagramOptions::default(),
    };

    write_dot(&args.output, &network, &SizeClassCost, &options)
        .with_context(|| format!("failed to write diagram to {}", args.output.display()))?;

    let export = DiagramExport {
        path: args.output.display().to_string(),
        airports: network.len(),
        flights: network.flight_count(),
        highlighted: options
            .highlight
            .iter()
            .map(|id| id.to_string())
            .collect(),
    };
    print!("{}", format.render(&export, diagram_text)?);
    Ok(())
}
