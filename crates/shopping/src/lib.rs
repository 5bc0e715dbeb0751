pub mod list;
pub mod nutrition;

pub use list::{ShoppingItem, ShoppingList};
pub use nutrition::{NutrientProfile, NutritionCalculator, NutritionTotals};
