//! Quantity solver
//!
//! Turns an ingredient's per-100g facts and its role into gram quantities,
//! one per goal.

use serde::{Deserialize, Serialize};

use crate::models::{GoalKey, GoalProfile, GoalRegistry, NutrientRole, NutritionFact};

/// Quantity used when the primary macro gives nothing to solve against
pub const FALLBACK_QUANTITY_G: f64 = 100.0;

/// Fixed seasoning portion, identical for every goal
pub const CONDIMENT_REFERENCE_G: f64 = 10.0;

/// Gram quantities of one ingredient for each goal, unrounded.
///
/// Serialized with the field names the recipe store uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleQuantity {
    pub role: NutrientRole,
    #[serde(rename = "quantity_equilibre")]
    pub balanced_g: f64,
    #[serde(rename = "quantity_perte_poids")]
    pub weight_loss_g: f64,
    #[serde(rename = "quantity_prise_masse")]
    pub muscle_gain_g: f64,
}

impl RoleQuantity {
    /// Quantity for a goal
    pub fn for_goal(&self, goal: GoalKey) -> f64 {
        match goal {
            GoalKey::Balanced => self.balanced_g,
            GoalKey::WeightLoss => self.weight_loss_g,
            GoalKey::MuscleGain => self.muscle_gain_g,
        }
    }

    /// Copy with each quantity rounded to a whole gram
    pub fn rounded(&self) -> Self {
        Self {
            role: self.role,
            balanced_g: self.balanced_g.round(),
            weight_loss_g: self.weight_loss_g.round(),
            muscle_gain_g: self.muscle_gain_g.round(),
        }
    }
}

/// Solve all three goal quantities for an ingredient in `role`
pub fn solve(role: NutrientRole, facts: &NutritionFact, registry: &GoalRegistry) -> RoleQuantity {
    RoleQuantity {
        role,
        balanced_g: solve_for_goal(role, facts, registry.profile(GoalKey::Balanced)),
        weight_loss_g: solve_for_goal(role, facts, registry.profile(GoalKey::WeightLoss)),
        muscle_gain_g: solve_for_goal(role, facts, registry.profile(GoalKey::MuscleGain)),
    }
}

/// Solve the quantity for a single goal profile
pub fn solve_for_goal(role: NutrientRole, facts: &NutritionFact, profile: &GoalProfile) -> f64 {
    match role {
        NutrientRole::Protein => back_solve(profile.protein_grams, facts.protein_g, role),
        NutrientRole::Carbs => back_solve(profile.carbs_grams, facts.carbs_g, role),
        NutrientRole::Fat => back_solve(profile.fat_grams, facts.fat_g, role),
        NutrientRole::Vegetables => profile.vegetables_grams,
        NutrientRole::Condiment => CONDIMENT_REFERENCE_G,
    }
}

/// Grams needed so that `per_100g` of a macro adds up to `target_grams`
fn back_solve(target_grams: f64, per_100g: f64, role: NutrientRole) -> f64 {
    let grams = if per_100g.is_finite() && per_100g > 0.0 {
        target_grams / (per_100g / 100.0)
    } else {
        f64::NAN
    };

    // Subnormal macros overflow the division; treat them like a missing macro
    if !grams.is_finite() {
        tracing::debug!(
            "No {} per 100g to solve against, using {}g fallback",
            role,
            FALLBACK_QUANTITY_G
        );
        return FALLBACK_QUANTITY_G;
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> NutritionFact {
        NutritionFact::new(165.0, 31.0, 0.0, 3.6)
    }

    fn rice() -> NutritionFact {
        NutritionFact::new(130.0, 2.7, 28.0, 0.3)
    }

    #[test]
    fn test_protein_role_targets_protein_grams() {
        let registry = GoalRegistry::default();
        let q = solve(NutrientRole::Protein, &chicken(), &registry);

        // 45 / (31 / 100) = 145.16
        assert!((q.muscle_gain_g - 145.161).abs() < 0.01);
        assert_eq!(q.rounded().muscle_gain_g, 145.0);
        assert!((q.balanced_g - 35.0 / 0.31).abs() < 1e-9);
        assert!((q.weight_loss_g - 30.0 / 0.31).abs() < 1e-9);
    }

    #[test]
    fn test_carbs_role_targets_carb_grams() {
        let registry = GoalRegistry::default();
        let q = solve(NutrientRole::Carbs, &rice(), &registry);
        assert!((q.balanced_g - 60.0 / 0.28).abs() < 1e-9);
        assert!(q.weight_loss_g < q.balanced_g);
        assert!(q.balanced_g < q.muscle_gain_g);
    }

    #[test]
    fn test_zero_macro_falls_back_for_every_goal() {
        let registry = GoalRegistry::default();
        let tofu_without_data = NutritionFact::new(76.0, 0.0, 1.9, 4.8);
        let q = solve(NutrientRole::Protein, &tofu_without_data, &registry);

        for goal in GoalKey::ALL {
            assert_eq!(q.for_goal(goal), FALLBACK_QUANTITY_G);
        }
    }

    #[test]
    fn test_subnormal_macro_falls_back_instead_of_overflowing() {
        let registry = GoalRegistry::default();
        let trace_protein = NutritionFact::new(10.0, 1e-310, 0.0, 0.0);
        assert!(trace_protein.validate().is_ok());

        let q = solve(NutrientRole::Protein, &trace_protein, &registry);
        for goal in GoalKey::ALL {
            assert_eq!(q.for_goal(goal), FALLBACK_QUANTITY_G);
        }
    }

    #[test]
    fn test_vegetables_use_reference_portion() {
        let registry = GoalRegistry::default();
        let broccoli = NutritionFact::new(34.0, 2.8, 7.0, 0.4);
        let q = solve(NutrientRole::Vegetables, &broccoli, &registry);
        assert_eq!(q.balanced_g, 150.0);
        assert_eq!(q.weight_loss_g, 200.0);
        assert_eq!(q.muscle_gain_g, 150.0);
    }

    #[test]
    fn test_fat_and_condiment_roles() {
        let registry = GoalRegistry::default();
        let olive_oil = NutritionFact::new(884.0, 0.0, 0.0, 100.0);
        let fat = solve(NutrientRole::Fat, &olive_oil, &registry);
        assert!((fat.balanced_g - 18.0).abs() < 1e-9);

        let salt = NutritionFact::default();
        let condiment = solve(NutrientRole::Condiment, &salt, &registry);
        assert_eq!(condiment.weight_loss_g, CONDIMENT_REFERENCE_G);
    }

    #[test]
    fn test_custom_registry_is_honoured() {
        let mut registry = GoalRegistry::default();
        registry.balanced.protein_grams = 62.0;
        let q = solve(NutrientRole::Protein, &chicken(), &registry);
        assert!((q.balanced_g - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let registry = GoalRegistry::default();
        let a = solve(NutrientRole::Carbs, &rice(), &registry);
        let b = solve(NutrientRole::Carbs, &rice(), &registry);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_with_store_field_names() {
        let registry = GoalRegistry::default();
        let q = solve(NutrientRole::Vegetables, &NutritionFact::default(), &registry);
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["role"], "vegetables");
        assert_eq!(json["quantity_equilibre"], 150.0);
        assert_eq!(json["quantity_perte_poids"], 200.0);
        assert_eq!(json["quantity_prise_masse"], 150.0);
    }
}
