pub mod filtering;
pub mod sorting;

pub use filtering::FoodFilter;
pub use sorting::*;
