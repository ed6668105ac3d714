//! Sorting module for multi-key food ordering
//!
//! This module provides:
//! - Field and direction enums parsed from user tokens
//! - Sort key extraction and missing-aware comparison
//! - Validation of flat token lists into a sort specification
//! - A composite comparator applying keys in priority order

pub mod comparator;
pub mod fields;
pub mod keys;
pub mod spec;
pub mod traits;

pub use comparator::*;
pub use fields::*;
pub use keys::*;
pub use spec::*;
pub use traits::*;
