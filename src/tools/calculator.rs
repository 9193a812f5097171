//! Calculator MCP Tools
//!
//! Thin layer between the MCP handlers and the nutrition kernel. Inputs
//! arrive as loosely typed values, results leave rounded for display.

use serde::{Deserialize, Serialize};

use crate::models::{
    AggregatedNutrition, CookingMetadata, Difficulty, GoalKey, GoalProfile, GoalRegistry,
    NutrientRole, NutritionFact, RecipeVariant, VariantIngredient,
};
use crate::nutrition::{
    self, Contribution, Deviations, RoleAssignment, RoleQuantity, Severity,
};

/// One goal in list_goal_profiles
#[derive(Debug, Serialize)]
pub struct GoalSummary {
    pub key: GoalKey,
    pub display_name: &'static str,
    pub profile: GoalProfile,
}

/// Response for list_goal_profiles
#[derive(Debug, Serialize)]
pub struct ListGoalsResponse {
    pub goals: Vec<GoalSummary>,
    pub monotonic: bool,
}

/// Response for solve_quantities
#[derive(Debug, Serialize)]
pub struct SolveQuantitiesResponse {
    /// Whole grams, as stored with the recipe
    pub quantities: RoleQuantity,
    pub unrounded: RoleQuantity,
}

/// A contribution as received from a caller
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionInput {
    pub role: String,
    pub quantity_g: f64,
    pub facts: NutritionFact,
}

/// Response for aggregate_nutrition
#[derive(Debug, Serialize)]
pub struct AggregateNutritionResponse {
    /// Whole units
    pub nutrition: AggregatedNutrition,
    pub contribution_count: usize,
}

/// Response for validate_nutrition
#[derive(Debug, Serialize)]
pub struct ValidateNutritionResponse {
    pub goal: GoalKey,
    pub valid: bool,
    pub severity: Severity,
    /// Whole percent
    pub deviations: Deviations,
    pub max_deviation_pct: f64,
}

/// A variant rounded for display
#[derive(Debug, Serialize)]
pub struct VariantDisplay {
    pub goal: GoalKey,
    pub goal_label: &'static str,
    pub ingredients: Vec<VariantIngredient>,
    pub nutrition: AggregatedNutrition,
    pub valid: bool,
    pub severity: Severity,
    pub deviations: Deviations,
    pub cooking_instructions: Vec<String>,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
    pub portion_size: f64,
}

impl From<&RecipeVariant> for VariantDisplay {
    fn from(v: &RecipeVariant) -> Self {
        Self {
            goal: v.goal,
            goal_label: v.goal.display_name(),
            ingredients: v.ingredients.clone(),
            nutrition: v.nutrition.rounded(),
            valid: v.validation.valid,
            severity: v.validation.severity,
            deviations: v.validation.deviations.rounded(),
            cooking_instructions: v.cooking_instructions.clone(),
            preparation_time: v.preparation_time,
            difficulty: v.difficulty,
            portion_size: v.portion_size,
        }
    }
}

/// Quantities of one ingredient, in the shape the recipe store persists
#[derive(Debug, Serialize)]
pub struct StoredQuantity {
    pub ingredient_id: i64,
    pub name: String,
    #[serde(flatten)]
    pub quantities: RoleQuantity,
}

/// Response for generate_recipe_variants
#[derive(Debug, Serialize)]
pub struct GenerateVariantsResponse {
    pub variants: Vec<VariantDisplay>,
    pub recipe_ingredients: Vec<StoredQuantity>,
}

fn parse_role(role: &str) -> Result<NutrientRole, String> {
    NutrientRole::from_str(role).ok_or_else(|| {
        format!(
            "Unknown role '{}'. Must be: protein, carbs, vegetables, fat, condiment",
            role
        )
    })
}

fn parse_goal(goal: &str) -> Result<GoalKey, String> {
    GoalKey::from_str(goal).ok_or_else(|| {
        format!("Unknown goal '{}'. Must be: balanced, weight_loss, muscle_gain", goal)
    })
}

/// List the active goal profiles
pub fn list_goals(registry: &GoalRegistry) -> ListGoalsResponse {
    let goals = registry
        .iter()
        .map(|(key, profile)| GoalSummary {
            key,
            display_name: key.display_name(),
            profile: *profile,
        })
        .collect();

    ListGoalsResponse {
        goals,
        monotonic: registry.is_monotonic(),
    }
}

/// Solve per-goal quantities for one ingredient
pub fn solve_quantities(
    registry: &GoalRegistry,
    role: &str,
    facts: NutritionFact,
) -> Result<SolveQuantitiesResponse, String> {
    let role = parse_role(role)?;
    facts.validate()?;

    let unrounded = nutrition::solve(role, &facts, registry);
    Ok(SolveQuantitiesResponse {
        quantities: unrounded.rounded(),
        unrounded,
    })
}

/// Sum the nutrition of explicit contributions
pub fn aggregate_nutrition(inputs: Vec<ContributionInput>) -> Result<AggregateNutritionResponse, String> {
    let mut contributions = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        let role = parse_role(&input.role)?;
        if !input.quantity_g.is_finite() || input.quantity_g < 0.0 {
            return Err(format!("contributions[{}].quantity_g must be a non-negative number", index));
        }
        input
            .facts
            .validate()
            .map_err(|e| format!("contributions[{}].facts: {}", index, e))?;
        contributions.push(Contribution::new(role, input.quantity_g, input.facts));
    }

    Ok(AggregateNutritionResponse {
        nutrition: nutrition::aggregate(&contributions).rounded(),
        contribution_count: contributions.len(),
    })
}

/// Check nutrition against a goal
pub fn validate_nutrition(
    registry: &GoalRegistry,
    goal: &str,
    actual: AggregatedNutrition,
) -> Result<ValidateNutritionResponse, String> {
    let goal = parse_goal(goal)?;
    actual.validate().map_err(|e| format!("nutrition: {}", e))?;
    let result = nutrition::validate(&actual, goal, registry);

    Ok(ValidateNutritionResponse {
        goal,
        valid: result.valid,
        severity: result.severity,
        deviations: result.deviations.rounded(),
        max_deviation_pct: result.deviations.max_abs_gated().round(),
    })
}

/// Generate the three goal variants of a recipe
pub fn generate_variants(
    registry: &GoalRegistry,
    assignment: RoleAssignment,
    metadata: CookingMetadata,
) -> Result<GenerateVariantsResponse, String> {
    let resolved = nutrition::resolve(&assignment, registry).map_err(|e| e.to_string())?;
    let variants = nutrition::variants_from_resolved(&resolved, &metadata, registry);

    Ok(GenerateVariantsResponse {
        variants: variants.iter().map(VariantDisplay::from).collect(),
        recipe_ingredients: resolved
            .into_iter()
            .map(|r| StoredQuantity {
                ingredient_id: r.ingredient_id,
                name: r.name,
                quantities: r.quantities.rounded(),
            })
            .collect(),
    })
}
