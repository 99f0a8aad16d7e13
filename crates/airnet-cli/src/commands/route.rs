//! Route command handler for computing the cheapest path between airports.

use std::path::Path;

use anyhow::{Context, Result};

use airnet_lib::{plan_route, RouteRequest, RouteSummary};

use super::{friendly_error, load};
use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCommandArgs {
    /// Origin airport id.
    pub from: String,
    /// Destination airport id.
    pub to: String,
    /// Intermediate stop.
    pub via: Option<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> RouteRequest {
        let request = RouteRequest::new(self.from.as_str(), self.to.as_str());
        match &self.via {
            Some(stop) => request.via(stop.as_str()),
            None => request,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    db_path: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let network = load(db_path)?;
    let request = args.to_request();
    let route = plan_route(&network, &request).map_err(friendly_error)?;
    let summary = RouteSummary::from_route(&network, &route, request.via.as_deref())
        .context("failed to build route summary for display")?;

    print!("{}", format.render_route(&summary)?);
    Ok(())
}
