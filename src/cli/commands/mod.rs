//! CLI command handlers for `DsExplorer`.
//!
//! Each command is implemented in its own submodule and returns a
//! user-facing error message on failure.

pub mod browse;
pub mod config;
pub mod explore;
pub mod suggest;
