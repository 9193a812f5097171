//! Recipe variant generation
//!
//! Produces one variant per goal from a single role assignment. Quantities
//! are rounded to whole grams before aggregation, so a variant's nutrition
//! matches the quantities it lists.

use serde::{Deserialize, Serialize};

use super::aggregator::{aggregate, Contribution};
use super::error::{CalcError, CalcResult};
use super::solver::{solve, RoleQuantity};
use super::validator::validate;
use crate::models::{
    CookingMetadata, GoalKey, GoalRegistry, Ingredient, NutrientRole, NutritionFact, RecipeVariant,
    VariantIngredient,
};

/// Ingredients chosen for each role of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub protein: Ingredient,
    pub carbs: Ingredient,
    pub vegetables: Ingredient,
    /// Optional fat or condiment additions, each solved by its own primary nutrient
    #[serde(default)]
    pub extras: Vec<Ingredient>,
}

/// An assigned ingredient with its checked facts and solved quantities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedIngredient {
    pub ingredient_id: i64,
    pub name: String,
    pub facts: NutritionFact,
    pub quantities: RoleQuantity,
}

impl RoleAssignment {
    /// Every (role, ingredient) pair, required roles first
    fn slots(&self) -> Vec<(NutrientRole, &Ingredient)> {
        let mut slots = vec![
            (NutrientRole::Protein, &self.protein),
            (NutrientRole::Carbs, &self.carbs),
            (NutrientRole::Vegetables, &self.vegetables),
        ];
        slots.extend(self.extras.iter().map(|extra| (extra.primary_nutrient, extra)));
        slots
    }
}

/// Check facts and solve quantities for every assigned ingredient.
///
/// Fails on the first ingredient without usable nutrition data, or on an
/// extra whose role is already covered by a required slot.
pub fn resolve(assignment: &RoleAssignment, registry: &GoalRegistry) -> CalcResult<Vec<ResolvedIngredient>> {
    if let Some(extra) = assignment
        .extras
        .iter()
        .find(|extra| !matches!(extra.primary_nutrient, NutrientRole::Fat | NutrientRole::Condiment))
    {
        return Err(CalcError::UnsupportedExtraRole {
            ingredient: extra.name.clone(),
            role: extra.primary_nutrient,
        });
    }

    assignment
        .slots()
        .into_iter()
        .map(|(role, ingredient)| -> CalcResult<ResolvedIngredient> {
            let facts = ingredient
                .nutritional_info
                .ok_or_else(|| CalcError::MissingNutritionData {
                    ingredient: ingredient.name.clone(),
                    role,
                })?;

            facts.validate().map_err(|reason| CalcError::InvalidNutritionData {
                ingredient: ingredient.name.clone(),
                reason,
            })?;

            if ingredient.primary_nutrient != role {
                tracing::warn!(
                    "Ingredient '{}' is tagged {} but assigned to {}; solving as {}",
                    ingredient.name,
                    ingredient.primary_nutrient,
                    role,
                    role
                );
            }

            Ok(ResolvedIngredient {
                ingredient_id: ingredient.id,
                name: ingredient.name.clone(),
                facts,
                quantities: solve(role, &facts, registry),
            })
        })
        .collect()
}

/// Generate the balanced, weight-loss and muscle-gain variants of a recipe
pub fn generate(
    assignment: &RoleAssignment,
    metadata: &CookingMetadata,
    registry: &GoalRegistry,
) -> CalcResult<[RecipeVariant; 3]> {
    let resolved = resolve(assignment, registry)?;

    tracing::debug!(
        "Generating variants for {} ingredients ({}, {}, {})",
        resolved.len(),
        assignment.protein.name,
        assignment.carbs.name,
        assignment.vegetables.name
    );

    Ok(variants_from_resolved(&resolved, metadata, registry))
}

/// Build the three variants from already resolved ingredients
pub fn variants_from_resolved(
    resolved: &[ResolvedIngredient],
    metadata: &CookingMetadata,
    registry: &GoalRegistry,
) -> [RecipeVariant; 3] {
    GoalKey::ALL.map(|goal| build_variant(goal, resolved, metadata, registry))
}

fn build_variant(
    goal: GoalKey,
    resolved: &[ResolvedIngredient],
    metadata: &CookingMetadata,
    registry: &GoalRegistry,
) -> RecipeVariant {
    let ingredients: Vec<VariantIngredient> = resolved
        .iter()
        .map(|r| VariantIngredient {
            name: r.name.clone(),
            role: r.quantities.role,
            quantity_g: r.quantities.for_goal(goal).round(),
        })
        .collect();

    let contributions: Vec<Contribution> = resolved
        .iter()
        .zip(&ingredients)
        .map(|(r, line)| Contribution::new(line.role, line.quantity_g, r.facts))
        .collect();

    let nutrition = aggregate(&contributions);
    let validation = validate(&nutrition, goal, registry);
    let portion_size: f64 = ingredients.iter().map(|i| i.quantity_g).sum();

    RecipeVariant {
        goal,
        ingredients,
        nutrition,
        validation,
        cooking_instructions: metadata.cooking_instructions.clone(),
        preparation_time: metadata.prep_time_minutes,
        difficulty: metadata.difficulty,
        portion_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use crate::nutrition::solver::FALLBACK_QUANTITY_G;

    fn assignment() -> RoleAssignment {
        RoleAssignment {
            protein: Ingredient::new(1, "Chicken breast", NutrientRole::Protein, NutritionFact::new(165.0, 31.0, 0.0, 3.6)),
            carbs: Ingredient::new(2, "Basmati rice (cooked)", NutrientRole::Carbs, NutritionFact::new(130.0, 2.7, 28.0, 0.3)),
            vegetables: Ingredient::new(
                3,
                "Broccoli",
                NutrientRole::Vegetables,
                NutritionFact {
                    fiber_g: Some(2.6),
                    ..NutritionFact::new(34.0, 2.8, 7.0, 0.4)
                },
            ),
            extras: Vec::new(),
        }
    }

    fn metadata() -> CookingMetadata {
        CookingMetadata {
            cooking_instructions: vec![
                "Grill the chicken".to_string(),
                "Steam the broccoli".to_string(),
                "Serve over rice".to_string(),
            ],
            prep_time_minutes: 25,
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_generates_one_variant_per_goal() {
        let registry = GoalRegistry::default();
        let variants = generate(&assignment(), &metadata(), &registry).unwrap();

        let goals: Vec<GoalKey> = variants.iter().map(|v| v.goal).collect();
        assert_eq!(goals, GoalKey::ALL.to_vec());

        for v in &variants {
            assert_eq!(v.cooking_instructions, metadata().cooking_instructions);
            assert_eq!(v.preparation_time, 25);
            assert_eq!(v.difficulty, Difficulty::Medium);
            assert_eq!(v.ingredients.len(), 3);
        }

        let protein: Vec<f64> = variants
            .iter()
            .map(|v| v.quantity_for(NutrientRole::Protein).unwrap())
            .collect();
        assert_eq!(protein, vec![113.0, 97.0, 145.0]);
        assert_ne!(variants[0].ingredients, variants[2].ingredients);
    }

    #[test]
    fn test_nutrition_matches_listed_quantities() {
        let registry = GoalRegistry::default();
        let variants = generate(&assignment(), &metadata(), &registry).unwrap();
        let muscle = &variants[2];

        // 145g chicken, 304g rice, 150g broccoli
        assert_eq!(muscle.quantity_for(NutrientRole::Carbs), Some(304.0));
        assert_eq!(muscle.quantity_for(NutrientRole::Vegetables), Some(150.0));
        let expected_protein = 145.0 * 0.31 + 304.0 * 0.027 + 150.0 * 0.028;
        assert!((muscle.nutrition.protein_g - expected_protein).abs() < 1e-9);
        assert_eq!(muscle.portion_size, 145.0 + 304.0 + 150.0);
        assert_eq!(muscle.validation, validate(&muscle.nutrition, GoalKey::MuscleGain, &registry));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let registry = GoalRegistry::default();
        let a = generate(&assignment(), &metadata(), &registry).unwrap();
        let b = generate(&assignment(), &metadata(), &registry).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_nutrition_fails_whole_call() {
        let registry = GoalRegistry::default();
        let mut recipe = assignment();
        recipe.carbs.nutritional_info = None;

        let err = generate(&recipe, &metadata(), &registry).unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingNutritionData {
                ingredient: "Basmati rice (cooked)".to_string(),
                role: NutrientRole::Carbs,
            }
        );
    }

    #[test]
    fn test_invalid_nutrition_is_rejected() {
        let registry = GoalRegistry::default();
        let mut recipe = assignment();
        recipe.vegetables.nutritional_info = Some(NutritionFact::new(34.0, 2.8, -7.0, 0.4));

        let err = generate(&recipe, &metadata(), &registry).unwrap_err();
        assert!(matches!(err, CalcError::InvalidNutritionData { ref ingredient, .. } if ingredient == "Broccoli"));
    }

    #[test]
    fn test_extras_are_solved_by_their_own_role() {
        let registry = GoalRegistry::default();
        let mut recipe = assignment();
        recipe.extras.push(Ingredient::new(4, "Olive oil", NutrientRole::Fat, NutritionFact::new(884.0, 0.0, 0.0, 100.0)));
        recipe.extras.push(Ingredient::new(5, "Soy sauce", NutrientRole::Condiment, NutritionFact::new(53.0, 8.1, 4.9, 0.6)));

        let variants = generate(&recipe, &metadata(), &registry).unwrap();
        let balanced = &variants[0];
        assert_eq!(balanced.ingredients.len(), 5);
        assert_eq!(balanced.quantity_for(NutrientRole::Fat), Some(18.0));
        assert_eq!(balanced.quantity_for(NutrientRole::Condiment), Some(10.0));
    }

    #[test]
    fn test_extra_with_required_role_is_rejected() {
        let registry = GoalRegistry::default();
        let mut recipe = assignment();
        recipe.extras.push(Ingredient::new(6, "Tuna", NutrientRole::Protein, NutritionFact::new(132.0, 28.0, 0.0, 1.3)));

        let err = generate(&recipe, &metadata(), &registry).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnsupportedExtraRole {
                ingredient: "Tuna".to_string(),
                role: NutrientRole::Protein,
            }
        );
        assert!(resolve(&recipe, &registry).is_err());
    }

    #[test]
    fn test_slot_role_wins_over_ingredient_tag() {
        let registry = GoalRegistry::default();
        let mut recipe = assignment();
        recipe.protein.primary_nutrient = NutrientRole::Carbs;

        let resolved = resolve(&recipe, &registry).unwrap();
        assert_eq!(resolved[0].quantities.role, NutrientRole::Protein);
    }

    #[test]
    fn test_zero_protein_ingredient_uses_fallback() {
        let registry = GoalRegistry::default();
        let mut recipe = assignment();
        recipe.protein = Ingredient::new(9, "Mislabelled tofu", NutrientRole::Protein, NutritionFact::new(76.0, 0.0, 1.9, 4.8));

        let variants = generate(&recipe, &metadata(), &registry).unwrap();
        for v in &variants {
            assert_eq!(v.quantity_for(NutrientRole::Protein), Some(FALLBACK_QUANTITY_G));
        }
    }
}
