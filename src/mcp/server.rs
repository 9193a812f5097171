//! Nutrimix MCP Server Implementation
//!
//! Implements the MCP server with all calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::RegistrySource;
use crate::models::{
    AggregatedNutrition, CookingMetadata, Difficulty, GoalRegistry, Ingredient, NutrientRole,
    NutritionFact,
};
use crate::nutrition::RoleAssignment;
use crate::tools::calculator::{self, ContributionInput};
use crate::tools::status::StatusTracker;

/// Nutrimix MCP Service
#[derive(Clone)]
pub struct NutrimixService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    registry: Arc<GoalRegistry>,
    tool_router: ToolRouter<NutrimixService>,
}

impl NutrimixService {
    pub fn new(registry: GoalRegistry, registry_source: RegistrySource) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(registry_source))),
            registry: Arc::new(registry),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Shared Parameter Structs
// ============================================================================

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct NutritionFactParams {
    /// Calories per 100g (or 100ml)
    pub calories: f64,
    /// Protein grams per 100g
    pub protein_g: f64,
    /// Carbohydrate grams per 100g
    pub carbs_g: f64,
    /// Fat grams per 100g
    pub fat_g: f64,
    /// Fiber grams per 100g (optional)
    pub fiber_g: Option<f64>,
    /// Sugar grams per 100g (optional)
    pub sugar_g: Option<f64>,
    /// Sodium milligrams per 100g (optional)
    pub sodium_mg: Option<f64>,
}

impl From<NutritionFactParams> for NutritionFact {
    fn from(p: NutritionFactParams) -> Self {
        NutritionFact {
            calories: p.calories,
            protein_g: p.protein_g,
            carbs_g: p.carbs_g,
            fat_g: p.fat_g,
            fiber_g: p.fiber_g,
            sugar_g: p.sugar_g,
            sodium_mg: p.sodium_mg,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    /// Ingredient ID in the inventory (optional)
    #[serde(default)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Role the ingredient is tagged with: protein, carbs, vegetables, fat, condiment.
    /// Defaults to the slot it is placed in; required for extras.
    pub primary_nutrient: Option<String>,
    /// Nutrition facts per 100g. Generation fails if missing.
    pub nutritional_info: Option<NutritionFactParams>,
}

impl IngredientParams {
    fn into_ingredient(self, slot: Option<NutrientRole>) -> Result<Ingredient, String> {
        let primary_nutrient = match (self.primary_nutrient.as_deref(), slot) {
            (Some(s), _) => NutrientRole::from_str(s)
                .ok_or_else(|| format!("Unknown primary_nutrient '{}' for '{}'", s, self.name))?,
            (None, Some(role)) => role,
            (None, None) => return Err(format!("Extra ingredient '{}' needs a primary_nutrient", self.name)),
        };

        Ok(Ingredient {
            id: self.id,
            name: self.name,
            primary_nutrient,
            nutritional_info: self.nutritional_info.map(NutritionFact::from),
        })
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SolveQuantitiesParams {
    /// Role of the ingredient: protein, carbs, vegetables, fat, condiment
    pub role: String,
    /// Nutrition facts per 100g
    pub facts: NutritionFactParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ContributionParams {
    /// Role of the ingredient
    pub role: String,
    /// Grams of the ingredient in the dish
    pub quantity_g: f64,
    /// Nutrition facts per 100g
    pub facts: NutritionFactParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AggregateNutritionParams {
    /// Ingredient lines to sum; roles left out contribute nothing
    pub contributions: Vec<ContributionParams>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateNutritionParams {
    /// Goal: balanced, weight_loss, muscle_gain
    pub goal: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateVariantsParams {
    /// Protein source
    pub protein: IngredientParams,
    /// Carbohydrate source
    pub carbs: IngredientParams,
    /// Vegetable source
    pub vegetables: IngredientParams,
    /// Optional fat or condiment additions
    #[serde(default)]
    pub extras: Vec<IngredientParams>,
    /// Cooking steps, shared by every variant
    #[serde(default)]
    pub cooking_instructions: Vec<String>,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Difficulty: easy, medium, hard (default easy)
    pub difficulty: Option<String>,
}

impl GenerateVariantsParams {
    fn into_inputs(self) -> Result<(RoleAssignment, CookingMetadata), String> {
        let difficulty = match self.difficulty.as_deref() {
            Some(s) => Difficulty::from_str(s)
                .ok_or_else(|| format!("Unknown difficulty '{}'. Must be: easy, medium, hard", s))?,
            None => Difficulty::default(),
        };

        let extras = self
            .extras
            .into_iter()
            .map(|extra| extra.into_ingredient(None))
            .collect::<Result<Vec<_>, _>>()?;

        let assignment = RoleAssignment {
            protein: self.protein.into_ingredient(Some(NutrientRole::Protein))?,
            carbs: self.carbs.into_ingredient(Some(NutrientRole::Carbs))?,
            vegetables: self.vegetables.into_ingredient(Some(NutrientRole::Vegetables))?,
            extras,
        };

        let metadata = CookingMetadata {
            cooking_instructions: self.cooking_instructions,
            prep_time_minutes: self.prep_time_minutes,
            difficulty,
        };

        Ok((assignment, metadata))
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutrimixService {
    // --- Status ---

    #[tool(description = "Get the current status of the Nutrimix service including build info, goal profile source, and process information")]
    async fn calculator_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        to_json(&status)
    }

    #[tool(description = "Get instructions for sizing recipes per fitness goal. Call this before using the calculator tools for the first time.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "List the goal profiles (balanced, weight_loss, muscle_gain) with their per-serving calorie and macro targets")]
    fn list_goal_profiles(&self) -> Result<CallToolResult, McpError> {
        to_json(&calculator::list_goals(&self.registry))
    }

    #[tool(description = "Compute the grams of one ingredient needed for each goal, given its role and nutrition facts per 100g")]
    fn solve_quantities(&self, Parameters(p): Parameters<SolveQuantitiesParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::solve_quantities(&self.registry, &p.role, p.facts.into())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Sum the nutrition of ingredient lines (role, grams, facts per 100g)")]
    fn aggregate_nutrition(&self, Parameters(p): Parameters<AggregateNutritionParams>) -> Result<CallToolResult, McpError> {
        let inputs = p
            .contributions
            .into_iter()
            .map(|c| ContributionInput {
                role: c.role,
                quantity_g: c.quantity_g,
                facts: c.facts.into(),
            })
            .collect();
        let result = calculator::aggregate_nutrition(inputs).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Compare a nutrition total with a goal's targets. Returns signed deviations in percent and a severity: acceptable (<=5%), warning (5-15%), critical (>15%)")]
    fn validate_nutrition(&self, Parameters(p): Parameters<ValidateNutritionParams>) -> Result<CallToolResult, McpError> {
        let actual = AggregatedNutrition {
            calories: p.calories,
            protein_g: p.protein_g,
            carbs_g: p.carbs_g,
            fat_g: p.fat_g,
            ..AggregatedNutrition::zero()
        };
        let result = calculator::validate_nutrition(&self.registry, &p.goal, actual)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Generate the balanced, weight_loss and muscle_gain variants of a recipe from its protein, carbs and vegetables ingredients. Fails if any ingredient lacks nutrition facts.")]
    fn generate_recipe_variants(&self, Parameters(p): Parameters<GenerateVariantsParams>) -> Result<CallToolResult, McpError> {
        let (assignment, metadata) = p.into_inputs().map_err(|e| McpError::invalid_params(e, None))?;
        let result = calculator::generate_variants(&self.registry, assignment, metadata)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutrimixService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrimix".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrimix Recipe Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrimix - per-goal recipe quantity calculator. \
                 IMPORTANT: Call calculator_instructions first. \
                 Goals: list_goal_profiles. \
                 Single steps: solve_quantities, aggregate_nutrition, validate_nutrition. \
                 Whole recipe: generate_recipe_variants (protein + carbs + vegetables, optional extras). \
                 Status: calculator_status."
                    .into(),
            ),
        }
    }
}
