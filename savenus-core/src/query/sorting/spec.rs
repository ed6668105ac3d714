//! Validation of `sort` arguments into a typed specification
//!
//! Arguments arrive as a flat list alternating field and direction tokens,
//! e.g. `PRICE ASC NAME DESC`. Pairs are checked left to right and the
//! first problem found is reported.

use super::{FieldKey, SortDirection, SortField, SortableEntity};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Reasons a token list is not a valid sort specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortSpecError {
    #[error("no sort fields were supplied")]
    EmptyInput,

    #[error("field {0} has no direction")]
    MissingDirection(SortField),

    #[error("'{0}' is not a sortable field")]
    InvalidField(String),

    #[error("'{0}' is not a sort direction")]
    InvalidDirection(String),

    #[error("field {0} appears more than once")]
    DuplicateField(SortField),
}

/// One (field, direction) pair of a specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    field: SortField,
    direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compare two entities on this key alone
    pub fn compare<T: SortableEntity>(&self, a: &T, b: &T) -> Ordering {
        let a_key: FieldKey<'_> = a.extract_key(self.field);
        let b_key = b.extract_key(self.field);
        a_key.compare_with_order(&b_key, self.direction)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// A validated, non-empty list of sort keys with no repeated field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpecification {
    keys: Vec<SortKey>,
}

impl SortSpecification {
    /// Validate a flat `FIELD DIRECTION ...` token list.
    ///
    /// Checks run in this order: empty input, then for each pair from the
    /// left the field token, the direction token (a missing direction or a
    /// field token in its place counts as missing), then duplicates.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, SortSpecError> {
        if tokens.is_empty() {
            debug!("rejecting empty sort specification");
            return Err(SortSpecError::EmptyInput);
        }

        let mut keys: Vec<SortKey> =
            Vec::with_capacity(tokens.len().div_ceil(2));
        for pair in tokens.chunks(2) {
            let field_token = pair[0].as_ref();
            let field = SortField::from_token(field_token).ok_or_else(|| {
                SortSpecError::InvalidField(field_token.to_string())
            })?;

            let direction = match pair.get(1).map(AsRef::as_ref) {
                None => return Err(SortSpecError::MissingDirection(field)),
                Some(token) if SortField::from_token(token).is_some() => {
                    return Err(SortSpecError::MissingDirection(field));
                }
                Some(token) => {
                    SortDirection::from_token(token).ok_or_else(|| {
                        SortSpecError::InvalidDirection(token.to_string())
                    })?
                }
            };

            if keys.iter().any(|key| key.field == field) {
                return Err(SortSpecError::DuplicateField(field));
            }
            keys.push(SortKey::new(field, direction));
        }

        debug!(keys = keys.len(), "validated sort specification");
        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<SortKey> {
        self.keys
    }
}

impl FromStr for SortSpecification {
    type Err = SortSpecError;

    /// Split on whitespace and validate, e.g. `"PRICE ASC NAME DESC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        Self::parse(&tokens)
    }
}

impl std::fmt::Display for SortSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
