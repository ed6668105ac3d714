//! Core library for the $aveNUS menu catalog.
//!
//! The crate owns the in-memory menu, the display model built on top of it
//! and the query layer that filters and orders foods for display:
//!
//! - [`menu`] keeps the list of unique foods and the wallet
//! - [`query`] parses sort specifications and composes multi-key orderings
//! - [`model`] combines the two into the projection handed to callers
//! - [`commands`] exposes user-facing operations such as `sort`

#![allow(missing_docs)]

pub mod commands;
pub mod menu;
pub mod model;
pub mod query;

pub use commands::{Command, CommandError, CommandResult, SortCommand};
pub use menu::{Menu, MenuError};
pub use model::Model;
pub use query::{
    FoodComparator, FoodFilter, SortDirection, SortField, SortKey,
    SortSpecError, SortSpecification,
};

pub use savenus_model as types;
