use crate::price::Price;
use crate::text::{
    Category, Description, Location, Name, OpeningHours, Restrictions,
};

/// A single menu entry.
///
/// Name, price and category are always present. The remaining attributes
/// are optional and absent values are simply `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Food {
    name: Name,
    price: Price,
    category: Category,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    description: Option<Description>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    location: Option<Location>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    opening_hours: Option<OpeningHours>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    restrictions: Option<Restrictions>,
}

impl Food {
    pub fn new(name: Name, price: Price, category: Category) -> Self {
        Self {
            name,
            price,
            category,
            description: None,
            location: None,
            opening_hours: None,
            restrictions: None,
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_opening_hours(mut self, opening_hours: OpeningHours) -> Self {
        self.opening_hours = Some(opening_hours);
        self
    }

    pub fn with_restrictions(mut self, restrictions: Restrictions) -> Self {
        self.restrictions = Some(restrictions);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn opening_hours(&self) -> Option<&OpeningHours> {
        self.opening_hours.as_ref()
    }

    pub fn restrictions(&self) -> Option<&Restrictions> {
        self.restrictions.as_ref()
    }

    /// Weaker notion of equality used to keep the menu free of duplicates.
    pub fn is_same_food(&self, other: &Food) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Display for Food {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Price: ${} Category: {}",
            self.name, self.price, self.category
        )?;
        if let Some(description) = &self.description {
            write!(f, " Description: {description}")?;
        }
        if let Some(location) = &self.location {
            write!(f, " Location: {location}")?;
        }
        if let Some(hours) = &self.opening_hours {
            write!(f, " Opening Hours: {hours}")?;
        }
        if let Some(restrictions) = &self.restrictions {
            write!(f, " Restrictions: {restrictions}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, price: &str) -> Food {
        Food::new(
            Name::new(name).unwrap(),
            Price::new(price).unwrap(),
            Category::new("Meal").unwrap(),
        )
    }

    #[test]
    fn same_food_compares_names_only() {
        let a = food("Chicken Rice", "3.50");
        let b = food("Chicken Rice", "4.00")
            .with_location(Location::new("Deck").unwrap());
        let c = food("Duck Rice", "3.50");

        assert!(a.is_same_food(&b));
        assert_ne!(a, b);
        assert!(!a.is_same_food(&c));
    }

    #[test]
    fn display_includes_present_optionals_only() {
        let rendered = food("Laksa", "5")
            .with_restrictions(Restrictions::new("halal").unwrap())
            .to_string();
        assert_eq!(
            rendered,
            "Laksa Price: $5.00 Category: Meal Restrictions: halal"
        );
    }
}
