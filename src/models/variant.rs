//! Recipe variant model
//!
//! One goal-specific rendering of a base recipe.

use serde::{Deserialize, Serialize};

use super::{AggregatedNutrition, GoalKey, NutrientRole};
use crate::nutrition::ValidationResult;

/// Cooking difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facile" => Some(Difficulty::Easy),
            "medium" | "moyen" => Some(Difficulty::Medium),
            "hard" | "difficile" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Cooking data shared verbatim by every variant of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingMetadata {
    pub cooking_instructions: Vec<String>,
    pub prep_time_minutes: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// An ingredient line of a variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantIngredient {
    pub name: String,
    pub role: NutrientRole,
    /// Whole grams
    pub quantity_g: f64,
}

/// A goal-specific version of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeVariant {
    pub goal: GoalKey,
    pub ingredients: Vec<VariantIngredient>,
    pub nutrition: AggregatedNutrition,
    pub validation: ValidationResult,
    pub cooking_instructions: Vec<String>,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    /// Plated weight in grams (sum of ingredient quantities)
    pub portion_size: f64,
}

impl RecipeVariant {
    /// Quantity of the first ingredient filling `role`
    pub fn quantity_for(&self, role: NutrientRole) -> Option<f64> {
        self.ingredients
            .iter()
            .find(|i| i.role == role)
            .map(|i| i.quantity_g)
    }
}
