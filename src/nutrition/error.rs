//! Calculator error types

use thiserror::Error;

use crate::models::NutrientRole;

/// Errors that abort a variant generation
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Ingredient '{ingredient}' assigned to {role} has no nutrition data")]
    MissingNutritionData { ingredient: String, role: NutrientRole },

    #[error("Ingredient '{ingredient}' has invalid nutrition data: {reason}")]
    InvalidNutritionData { ingredient: String, reason: String },

    #[error("Extra ingredient '{ingredient}' is tagged {role}; extras must be fat or condiment")]
    UnsupportedExtraRole { ingredient: String, role: NutrientRole },
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
