//! AirNet CLI library.
//!
//! Subcommand handlers and output formatting for the `airnet` binary. The
//! handlers load the network from the configured database, apply one
//! operation, and persist the result when the network changed.

pub mod commands;
pub mod output;
