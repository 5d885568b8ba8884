//! Shared library for `DsExplorer`
//! Catalog store, query engine, and report rendering used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
