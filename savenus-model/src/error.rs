use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A text value was empty or whitespace only.
    Blank(&'static str),
    InvalidPrice(String),
    InvalidBudget(String),
    InvalidDaysToExpire(u32),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Blank(kind) => write!(f, "{kind} cannot be blank"),
            ModelError::InvalidPrice(raw) => write!(
                f,
                "invalid price '{raw}': expected digits with at most two decimal places"
            ),
            ModelError::InvalidBudget(raw) => write!(
                f,
                "invalid budget '{raw}': expected an amount between 0.00 and 1000000.00"
            ),
            ModelError::InvalidDaysToExpire(days) => write!(
                f,
                "invalid days to expire {days}: expected a value between 0 and 365"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
