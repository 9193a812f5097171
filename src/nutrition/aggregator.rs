//! Recipe nutrition aggregation
//!
//! Sums the nutrition of explicit (role, quantity, facts) contributions.
//! No rounding happens here so aggregates compose.

use serde::{Deserialize, Serialize};

use crate::models::{AggregatedNutrition, NutrientRole, NutritionFact};

/// One ingredient's share of a dish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub role: NutrientRole,
    pub quantity_g: f64,
    pub facts: NutritionFact,
}

impl Contribution {
    pub fn new(role: NutrientRole, quantity_g: f64, facts: NutritionFact) -> Self {
        Self { role, quantity_g, facts }
    }

    /// Nutrition this contribution adds
    pub fn nutrition(&self) -> AggregatedNutrition {
        self.facts.contribution(self.quantity_g)
    }
}

/// Total nutrition of the given contributions.
///
/// Roles left out of the list contribute nothing.
pub fn aggregate(contributions: &[Contribution]) -> AggregatedNutrition {
    contributions.iter().map(Contribution::nutrition).sum()
}
