//! Core data model definitions shared across $aveNUS crates.
#![allow(missing_docs)]

pub mod error;
pub mod food;
pub mod price;
pub mod text;
pub mod wallet;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use food::Food;
pub use price::Price;
pub use text::{
    Category, Description, Location, Name, OpeningHours, Restrictions,
};
pub use wallet::{DaysToExpire, RemainingBudget, Wallet};
