//! Data models
//!
//! Plain values passed into and out of the calculator.

mod goal;
mod ingredient;
mod nutrition;
mod variant;

pub use goal::{GoalKey, GoalProfile, GoalRegistry};
pub use ingredient::{Ingredient, NutrientRole};
pub use nutrition::{AggregatedNutrition, NutritionFact};
pub use variant::{CookingMetadata, Difficulty, RecipeVariant, VariantIngredient};
