//! Menu-level data: the unique food list and the wallet.

mod unique_foods;

pub use unique_foods::UniqueFoodList;

use savenus_model::{DaysToExpire, Food, RemainingBudget, Wallet};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("a food named '{0}' already exists in the menu")]
    DuplicateFood(String),
    #[error("no food named '{0}' exists in the menu")]
    FoodNotFound(String),
}

/// Wraps all data at the menu level.
///
/// Foods keep insertion order; any display ordering is applied as a
/// projection by [`crate::model::Model`] and never written back here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    foods: UniqueFoodList,
    wallet: Wallet,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a menu from `foods`, rejecting duplicates.
    pub fn from_foods(
        foods: Vec<Food>,
        wallet: Wallet,
    ) -> Result<Self, MenuError> {
        let mut menu = Menu {
            foods: UniqueFoodList::new(),
            wallet,
        };
        menu.set_foods(foods)?;
        Ok(menu)
    }

    /// Replace the contents of this menu with a copy of `other`.
    pub fn reset_data(&mut self, other: &Menu) {
        self.clone_from(other);
    }

    pub fn set_foods(&mut self, foods: Vec<Food>) -> Result<(), MenuError> {
        self.foods.set_foods(foods)
    }

    pub fn has_food(&self, food: &Food) -> bool {
        self.foods.contains(food)
    }

    pub fn add_food(&mut self, food: Food) -> Result<(), MenuError> {
        debug!(name = %food.name(), "adding food");
        self.foods.add(food)
    }

    /// Replace `target` with `edited`. `target` must exist and `edited`
    /// must not be the same food as any other entry.
    pub fn set_food(
        &mut self,
        target: &Food,
        edited: Food,
    ) -> Result<(), MenuError> {
        self.foods.set_food(target, edited)
    }

    pub fn remove_food(&mut self, target: &Food) -> Result<Food, MenuError> {
        debug!(name = %target.name(), "removing food");
        self.foods.remove(target)
    }

    pub fn foods(&self) -> &[Food] {
        self.foods.as_slice()
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn set_wallet(&mut self, wallet: Wallet) {
        self.wallet = wallet;
    }

    pub fn set_remaining_budget(&mut self, budget: RemainingBudget) {
        self.wallet.set_remaining_budget(budget);
    }

    pub fn set_days_to_expire(&mut self, days: DaysToExpire) {
        self.wallet.set_days_to_expire(days);
    }
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Food Items: \n...\nWallet: \n{}",
            self.foods.len(),
            self.wallet
        )
    }
}
