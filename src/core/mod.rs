//! Core module for common functionality across all targets

pub mod catalog;
pub mod config;
pub mod models;
pub mod query;
pub mod report;

/// Returns the current version of the `DsExplorer` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
