//! Shared nutrition data structures
//!
//! `NutritionFact` is what an ingredient carries (per 100g/100ml), and
//! `AggregatedNutrition` is what a recipe adds up to.

use serde::{Deserialize, Serialize};

/// Nutritional facts of a raw ingredient, per 100 grams (or 100 ml)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFact {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
}

impl NutritionFact {
    /// Macro-only facts, optional fields left empty
    pub fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            ..Self::default()
        }
    }

    /// Check that every value is finite and non-negative.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
        ];
        let optional = [
            ("fiber_g", self.fiber_g),
            ("sugar_g", self.sugar_g),
            ("sodium_mg", self.sodium_mg),
        ];

        let fields = required
            .into_iter()
            .chain(optional.into_iter().filter_map(|(name, v)| v.map(|v| (name, v))));

        check_non_negative(fields)
    }

    /// Nutrition contributed by `quantity_g` grams of this ingredient
    pub fn contribution(&self, quantity_g: f64) -> AggregatedNutrition {
        AggregatedNutrition {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g.unwrap_or(0.0),
            sugar_g: self.sugar_g.unwrap_or(0.0),
            sodium_mg: self.sodium_mg.unwrap_or(0.0),
        }
        .scale(quantity_g / 100.0)
    }
}

/// Total nutrition of a dish, unrounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedNutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
}

impl AggregatedNutrition {
    /// Create a new AggregatedNutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_g: self.protein_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
            fat_g: self.fat_g * multiplier,
            fiber_g: self.fiber_g * multiplier,
            sugar_g: self.sugar_g * multiplier,
            sodium_mg: self.sodium_mg * multiplier,
        }
    }

    /// Add another nutrition total to this one
    pub fn add(&self, other: &AggregatedNutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
            fiber_g: self.fiber_g + other.fiber_g,
            sugar_g: self.sugar_g + other.sugar_g,
            sodium_mg: self.sodium_mg + other.sodium_mg,
        }
    }

    /// Check that every field is a finite, non-negative number
    pub fn validate(&self) -> Result<(), String> {
        check_non_negative([
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
            ("fiber_g", self.fiber_g),
            ("sugar_g", self.sugar_g),
            ("sodium_mg", self.sodium_mg),
        ])
    }

    /// Copy with every field rounded to a whole unit, for display
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein_g: self.protein_g.round(),
            carbs_g: self.carbs_g.round(),
            fat_g: self.fat_g.round(),
            fiber_g: self.fiber_g.round(),
            sugar_g: self.sugar_g.round(),
            sodium_mg: self.sodium_mg.round(),
        }
    }
}

fn check_non_negative<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> Result<(), String> {
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(format!("{} is not a finite number", name));
        }
        if value < 0.0 {
            return Err(format!("{} cannot be negative", name));
        }
    }
    Ok(())
}

impl std::ops::Add for AggregatedNutrition {
    type Output = AggregatedNutrition;

    fn add(self, other: AggregatedNutrition) -> AggregatedNutrition {
        AggregatedNutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for AggregatedNutrition {
    type Output = AggregatedNutrition;

    fn mul(self, multiplier: f64) -> AggregatedNutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for AggregatedNutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(AggregatedNutrition::zero(), |acc, n| acc + n)
    }
}
