use savenus_model::Food;

use super::MenuError;

/// A list of foods in which no two entries are the same food.
///
/// Identity uses [`Food::is_same_food`], so two entries may not share a
/// name even if their other attributes differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueFoodList {
    foods: Vec<Food>,
}

impl UniqueFoodList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, food: &Food) -> bool {
        self.foods.iter().any(|f| f.is_same_food(food))
    }

    pub fn add(&mut self, food: Food) -> Result<(), MenuError> {
        if self.contains(&food) {
            return Err(MenuError::DuplicateFood(food.name().to_string()));
        }
        self.foods.push(food);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    pub fn set_food(
        &mut self,
        target: &Food,
        edited: Food,
    ) -> Result<(), MenuError> {
        let index = self.position(target)?;
        let collides = self
            .foods
            .iter()
            .enumerate()
            .any(|(i, f)| i != index && f.is_same_food(&edited));
        if collides {
            return Err(MenuError::DuplicateFood(edited.name().to_string()));
        }
        self.foods[index] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Food) -> Result<Food, MenuError> {
        let index = self.position(target)?;
        Ok(self.foods.remove(index))
    }

    /// Replace the whole list. Nothing changes if `foods` holds duplicates.
    pub fn set_foods(&mut self, foods: Vec<Food>) -> Result<(), MenuError> {
        if let Some(duplicate) = first_duplicate(&foods) {
            return Err(MenuError::DuplicateFood(
                duplicate.name().to_string(),
            ));
        }
        self.foods = foods;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    fn position(&self, target: &Food) -> Result<usize, MenuError> {
        self.foods
            .iter()
            .position(|f| f == target)
            .ok_or_else(|| MenuError::FoodNotFound(target.name().to_string()))
    }
}

fn first_duplicate(foods: &[Food]) -> Option<&Food> {
    foods.iter().enumerate().find_map(|(i, food)| {
        foods[..i]
            .iter()
            .any(|earlier| earlier.is_same_food(food))
            .then_some(food)
    })
}
