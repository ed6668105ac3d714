//! Core trait for sortable menu entities

use super::{FieldKey, SortField};
use savenus_model::Food;

/// Base trait for any item the composite comparator can order
pub trait SortableEntity {
    /// Extract the comparable projection of `field`
    fn extract_key(&self, field: SortField) -> FieldKey<'_>;
}

impl SortableEntity for Food {
    fn extract_key(&self, field: SortField) -> FieldKey<'_> {
        match field {
            SortField::Name => FieldKey::text(self.name().as_str()),
            SortField::Price => FieldKey::Price(self.price().cents()),
            SortField::Category => FieldKey::text(self.category().as_str()),
            SortField::Description => {
                FieldKey::Text(self.description().map(|d| d.as_str()))
            }
            SortField::Location => {
                FieldKey::Text(self.location().map(|l| l.as_str()))
            }
            SortField::OpeningHours => {
                FieldKey::Text(self.opening_hours().map(|h| h.as_str()))
            }
            SortField::Restrictions => {
                FieldKey::Text(self.restrictions().map(|r| r.as_str()))
            }
        }
    }
}

impl<T: SortableEntity + ?Sized> SortableEntity for &T {
    fn extract_key(&self, field: SortField) -> FieldKey<'_> {
        (**self).extract_key(field)
    }
}
