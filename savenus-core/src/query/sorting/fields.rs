//! Field and direction tokens accepted by the `sort` command
//!
//! Tokens are matched exactly: `PRICE` is a field, `price` is not.

use std::fmt;

/// Fields available for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Price,
    Category,
    Description,
    Location,
    OpeningHours,
    Restrictions,
}

impl SortField {
    /// Every field, in the order they are listed to users.
    pub const ALL: [SortField; 7] = [
        SortField::Name,
        SortField::Price,
        SortField::Category,
        SortField::Description,
        SortField::Location,
        SortField::OpeningHours,
        SortField::Restrictions,
    ];

    /// The token users type for this field
    pub const fn token(self) -> &'static str {
        match self {
            SortField::Name => "NAME",
            SortField::Price => "PRICE",
            SortField::Category => "CATEGORY",
            SortField::Description => "DESCRIPTION",
            SortField::Location => "LOCATION",
            SortField::OpeningHours => "OPENING_HOURS",
            SortField::Restrictions => "RESTRICTIONS",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.token() == token)
    }

    /// Whether values of this field may be absent on a food
    pub const fn is_optional(self) -> bool {
        matches!(
            self,
            SortField::Description
                | SortField::Location
                | SortField::OpeningHours
                | SortField::Restrictions
        )
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] =
        [SortDirection::Ascending, SortDirection::Descending];

    pub const fn token(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.token() == token)
    }

    pub fn is_reverse(self) -> bool {
        self == SortDirection::Descending
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
