//! AirNet library entry points.
//!
//! This crate models airports and the directed flights between them, prices
//! flights with a size-class cost model, and plans lowest-cost routes
//! (optionally through a required stop) with Dijkstra's algorithm. Storage
//! and diagram export sit beside the core; front ends such as the CLI should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod airport;
pub mod config;
pub mod cost;
pub mod db;
pub mod diagram;
pub mod error;
pub mod flight;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use airport::{Airport, AirportId, Location, SizeClass};
pub use config::{default_database_path, resolve_database_path, DATABASE_ENV};
pub use cost::{CostModel, SizeClassCost};
pub use db::{load_network, save_network};
pub use diagram::{render_dot, write_dot, DiagramOptions};
pub use error::{Error, ErrorKind, Result};
pub use flight::Flight;
pub use graph::{build_graph, Graph};
pub use network::{AirportUpdate, Network};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_dijkstra, shortest_path_tree, ShortestPathTree};
pub use routing::{plan_route, Route, RouteLeg, RouteRequest, Router};
