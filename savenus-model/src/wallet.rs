use crate::error::{ModelError, Result};
use crate::price::{format_cents, parse_cents};

const MAX_BUDGET_CENTS: u64 = 100_000_000;
const MAX_DAYS_TO_EXPIRE: u32 = 365;

/// Money left to spend, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RemainingBudget(u64);

impl RemainingBudget {
    pub fn new(raw: &str) -> Result<Self> {
        parse_cents(raw)
            .filter(|cents| *cents <= MAX_BUDGET_CENTS)
            .map(RemainingBudget)
            .ok_or_else(|| ModelError::InvalidBudget(raw.to_string()))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RemainingBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_cents(self.0))
    }
}

impl TryFrom<String> for RemainingBudget {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        RemainingBudget::new(&value)
    }
}

impl From<RemainingBudget> for String {
    fn from(budget: RemainingBudget) -> Self {
        budget.to_string()
    }
}

/// Days until the current budget lapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct DaysToExpire(u32);

impl DaysToExpire {
    pub fn new(days: u32) -> Result<Self> {
        if days > MAX_DAYS_TO_EXPIRE {
            return Err(ModelError::InvalidDaysToExpire(days));
        }
        Ok(DaysToExpire(days))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DaysToExpire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for DaysToExpire {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self> {
        DaysToExpire::new(value)
    }
}

impl From<DaysToExpire> for u32 {
    fn from(days: DaysToExpire) -> Self {
        days.0
    }
}

/// The user's budget and how long it lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wallet {
    #[cfg_attr(feature = "serde", serde(default))]
    remaining_budget: RemainingBudget,
    #[cfg_attr(feature = "serde", serde(default))]
    days_to_expire: DaysToExpire,
}

impl Wallet {
    pub fn new(
        remaining_budget: RemainingBudget,
        days_to_expire: DaysToExpire,
    ) -> Self {
        Self {
            remaining_budget,
            days_to_expire,
        }
    }

    pub fn remaining_budget(&self) -> RemainingBudget {
        self.remaining_budget
    }

    pub fn days_to_expire(&self) -> DaysToExpire {
        self.days_to_expire
    }

    pub fn set_remaining_budget(&mut self, budget: RemainingBudget) {
        self.remaining_budget = budget;
    }

    pub fn set_days_to_expire(&mut self, days: DaysToExpire) {
        self.days_to_expire = days;
    }
}

impl std::fmt::Display for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Remaining Budget: ${}\nDays to Expire: {}",
            self.remaining_budget, self.days_to_expire
        )
    }
}
