//! Free-text attributes of a food item.
//!
//! Every attribute shares the same rule: the value may contain anything
//! except be empty or whitespace only. The stored text is kept as entered.

use crate::error::{ModelError, Result};

macro_rules! text_value {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok($name(value))
                } else {
                    Err(ModelError::Blank($label))
                }
            }

            /// Returns true if `value` is acceptable for this attribute.
            pub fn is_valid(value: &str) -> bool {
                !value.trim().is_empty()
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self> {
                $name::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_value!(
    /// Display name; two foods with equal names are the same food.
    Name,
    "name"
);
text_value!(Category, "category");
text_value!(Description, "description");
text_value!(Location, "location");
text_value!(
    /// Free-form opening hours such as `0800 2000`.
    OpeningHours,
    "opening hours"
);
text_value!(
    /// Dietary restrictions, e.g. `halal` or `no beef`.
    Restrictions,
    "restrictions"
);
