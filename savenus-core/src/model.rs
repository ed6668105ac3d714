//! Display model over a menu.
//!
//! The model owns the menu together with the active filter and ordering.
//! [`Model::displayed_foods`] recomputes the projection on every call, so
//! edits to the menu are reflected immediately without cache invalidation.

use savenus_model::{DaysToExpire, Food, RemainingBudget, Wallet};
use tracing::debug;

use crate::menu::{Menu, MenuError};
use crate::query::{FoodComparator, FoodFilter};

#[derive(Debug, Clone, Default)]
pub struct Model {
    menu: Menu,
    filter: FoodFilter,
    ordering: Option<FoodComparator>,
}

impl Model {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            filter: FoodFilter::All,
            ordering: None,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Foods passing the filter, in display order. Without an ordering the
    /// menu's insertion order is kept.
    pub fn displayed_foods(&self) -> Vec<&Food> {
        let visible = self
            .menu
            .foods()
            .iter()
            .filter(|food| self.filter.matches(food));
        match &self.ordering {
            Some(comparator) => comparator.order(visible),
            None => visible.collect(),
        }
    }

    pub fn filter(&self) -> &FoodFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: FoodFilter) {
        debug!(?filter, "updating display filter");
        self.filter = filter;
    }

    pub fn ordering(&self) -> Option<&FoodComparator> {
        self.ordering.as_ref()
    }

    /// Replace the display ordering. The menu itself is not reordered.
    pub fn apply_ordering(&mut self, comparator: FoodComparator) {
        debug!(keys = comparator.keys().len(), "applying display ordering");
        self.ordering = Some(comparator);
    }

    pub fn clear_ordering(&mut self) {
        self.ordering = None;
    }

    pub fn has_food(&self, food: &Food) -> bool {
        self.menu.has_food(food)
    }

    pub fn add_food(&mut self, food: Food) -> Result<(), MenuError> {
        self.menu.add_food(food)
    }

    pub fn set_food(
        &mut self,
        target: &Food,
        edited: Food,
    ) -> Result<(), MenuError> {
        self.menu.set_food(target, edited)
    }

    pub fn remove_food(&mut self, target: &Food) -> Result<Food, MenuError> {
        self.menu.remove_food(target)
    }

    pub fn set_foods(&mut self, foods: Vec<Food>) -> Result<(), MenuError> {
        self.menu.set_foods(foods)
    }

    pub fn wallet(&self) -> &Wallet {
        self.menu.wallet()
    }

    pub fn set_remaining_budget(&mut self, budget: RemainingBudget) {
        self.menu.set_remaining_budget(budget);
    }

    pub fn set_days_to_expire(&mut self, days: DaysToExpire) {
        self.menu.set_days_to_expire(days);
    }
}
