//! Ingredient model
//!
//! Ingredients come from the inventory side; the calculator only reads them.

use serde::{Deserialize, Serialize};

use super::NutritionFact;

/// Nutritional purpose an ingredient serves in a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientRole {
    Protein,
    Carbs,
    Vegetables,
    Fat,
    Condiment,
}

impl NutrientRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientRole::Protein => "protein",
            NutrientRole::Carbs => "carbs",
            NutrientRole::Vegetables => "vegetables",
            NutrientRole::Fat => "fat",
            NutrientRole::Condiment => "condiment",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protein" | "proteins" | "proteine" | "protéine" => Some(NutrientRole::Protein),
            "carbs" | "carb" | "glucides" => Some(NutrientRole::Carbs),
            "vegetables" | "vegetable" | "legumes" | "légumes" => Some(NutrientRole::Vegetables),
            "fat" | "fats" | "lipides" => Some(NutrientRole::Fat),
            "condiment" | "condiments" => Some(NutrientRole::Condiment),
            _ => None,
        }
    }
}

impl std::fmt::Display for NutrientRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ingredient record as supplied by the inventory store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub primary_nutrient: NutrientRole,
    /// Missing facts make the ingredient unusable for variant generation
    #[serde(default)]
    pub nutritional_info: Option<NutritionFact>,
}

impl Ingredient {
    pub fn new(id: i64, name: impl Into<String>, primary_nutrient: NutrientRole, facts: NutritionFact) -> Self {
        Self {
            id,
            name: name.into(),
            primary_nutrient,
            nutritional_info: Some(facts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_aliases() {
        assert_eq!(NutrientRole::from_str("Protein"), Some(NutrientRole::Protein));
        assert_eq!(NutrientRole::from_str("glucides"), Some(NutrientRole::Carbs));
        assert_eq!(NutrientRole::from_str(" légumes "), Some(NutrientRole::Vegetables));
        assert_eq!(NutrientRole::from_str("fiber"), None);
    }

    #[test]
    fn test_role_round_trips_through_as_str() {
        for role in [
            NutrientRole::Protein,
            NutrientRole::Carbs,
            NutrientRole::Vegetables,
            NutrientRole::Fat,
            NutrientRole::Condiment,
        ] {
            assert_eq!(NutrientRole::from_str(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_ingredient_without_facts_deserializes() {
        let json = r#"{"id": 7, "name": "Mystery sauce", "primary_nutrient": "condiment"}"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.primary_nutrient, NutrientRole::Condiment);
        assert!(ingredient.nutritional_info.is_none());
    }
}
