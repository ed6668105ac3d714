//! Composite comparator over a validated sort specification

use super::{SortKey, SortSpecification, SortableEntity};
use std::cmp::Ordering;

/// Orders entities by each key in turn, falling through to the next key
/// on ties. Sorting through this comparator is stable, so entities equal
/// under every key keep their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodComparator {
    keys: Vec<SortKey>,
}

impl FoodComparator {
    pub fn new(spec: SortSpecification) -> Self {
        Self {
            keys: spec.into_keys(),
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn compare<T: SortableEntity>(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .fold(Ordering::Equal, |ord, key| {
                ord.then_with(|| key.compare(a, b))
            })
    }

    /// Sort `items` in place.
    pub fn sort<T: SortableEntity>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Return an ordered copy of `items`, leaving the source untouched.
    pub fn sorted<T: SortableEntity + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.sort(&mut out);
        out
    }

    /// Order borrowed entities without cloning them.
    pub fn order<'a, T, I>(&self, items: I) -> Vec<&'a T>
    where
        T: SortableEntity + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut refs: Vec<&'a T> = items.into_iter().collect();
        refs.sort_by(|a, b| self.compare(*a, *b));
        refs
    }
}

impl From<SortSpecification> for FoodComparator {
    fn from(spec: SortSpecification) -> Self {
        FoodComparator::new(spec)
    }
}
