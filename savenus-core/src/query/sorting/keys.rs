//! Sort key types for comparing foods
//!
//! These types borrow the values extracted from a food and handle
//! missing data in their comparisons: an absent value always sorts after
//! every present one, whichever direction is requested.

use super::SortDirection;
use std::cmp::Ordering;

/// Comparable projection of one field of a food
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKey<'a> {
    /// Free text, compared by code point so the order never depends on locale
    Text(Option<&'a str>),
    /// Price in cents
    Price(u64),
}

impl<'a> FieldKey<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldKey::Text(Some(value))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldKey::Text(None))
    }

    /// Compare two keys, keeping missing values last in both directions
    pub fn compare_with_order(
        &self,
        other: &Self,
        direction: SortDirection,
    ) -> Ordering {
        let natural = match (self, other) {
            (FieldKey::Price(a), FieldKey::Price(b)) => a.cmp(b),
            (FieldKey::Text(a), FieldKey::Text(b)) => match (a, b) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            },
            (FieldKey::Price(_), FieldKey::Text(_))
            | (FieldKey::Text(_), FieldKey::Price(_)) => {
                unreachable!("keys extracted for one field share a variant")
            }
        };

        if direction.is_reverse() {
            natural.reverse()
        } else {
            natural
        }
    }
}
