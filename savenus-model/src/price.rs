use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ModelError, Result};

static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,9})(?:\.(\d{1,2}))?$")
        .expect("amount regex should compile")
});

/// Parse a decimal amount such as `4`, `4.5` or `4.50` into cents.
pub(crate) fn parse_cents(raw: &str) -> Option<u64> {
    let captures = AMOUNT_PATTERN.captures(raw.trim())?;
    let whole: u64 = captures.get(1)?.as_str().parse().ok()?;
    let fraction = match captures.get(2).map(|m| m.as_str()) {
        None => 0,
        Some(digits) if digits.len() == 1 => digits.parse::<u64>().ok()? * 10,
        Some(digits) => digits.parse::<u64>().ok()?,
    };
    whole.checked_mul(100)?.checked_add(fraction)
}

pub(crate) fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Price of a food item, held as integer cents so comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Price(u64);

impl Price {
    pub fn new(raw: &str) -> Result<Self> {
        parse_cents(raw)
            .map(Price)
            .ok_or_else(|| ModelError::InvalidPrice(raw.to_string()))
    }

    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_cents(self.0))
    }
}

impl std::str::FromStr for Price {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Price::new(s)
    }
}

impl TryFrom<String> for Price {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Price::new(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(Price::new("4").unwrap().cents(), 400);
        assert_eq!(Price::new("4.5").unwrap().cents(), 450);
        assert_eq!(Price::new("4.05").unwrap().cents(), 405);
        assert_eq!(Price::new(" 12.30 ").unwrap().cents(), 1230);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for raw in ["", "abc", "-1", "4.555", "4.", ".5", "1e3"] {
            assert_eq!(
                Price::new(raw),
                Err(ModelError::InvalidPrice(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Price::new("3").unwrap().to_string(), "3.00");
        assert_eq!(Price::from_cents(1205).to_string(), "12.05");
    }

    #[test]
    fn orders_numerically_not_textually() {
        let nine = Price::new("9.00").unwrap();
        let ten = Price::new("10").unwrap();
        assert!(nine < ten);
    }
}
