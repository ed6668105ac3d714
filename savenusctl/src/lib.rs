//! Command-line front end for the $aveNUS menu catalog.
//!
//! The binary is a thin wrapper; configuration loading, snapshot parsing
//! and command execution live here so they can be exercised directly.

#![allow(missing_docs)]

pub mod config;
pub mod runner;
pub mod snapshot;
pub mod table;

pub use config::{CliConfig, ConfigLoadError};
pub use runner::{SortOptions, SortOutcome, run_fields, run_sort};
pub use snapshot::{MenuSnapshot, SnapshotError};
