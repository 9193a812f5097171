//! Nutrition goals and their per-serving targets

use serde::{Deserialize, Serialize};

/// Fitness goal a customer can pick for a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKey {
    Balanced,
    WeightLoss,
    MuscleGain,
}

impl GoalKey {
    /// Every goal, in the order variants are produced
    pub const ALL: [GoalKey; 3] = [GoalKey::Balanced, GoalKey::WeightLoss, GoalKey::MuscleGain];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKey::Balanced => "balanced",
            GoalKey::WeightLoss => "weight_loss",
            GoalKey::MuscleGain => "muscle_gain",
        }
    }

    /// Label shown on the storefront
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalKey::Balanced => "Équilibré",
            GoalKey::WeightLoss => "Perte de poids",
            GoalKey::MuscleGain => "Prise de masse",
        }
    }

    /// Parse from string, accepting the storefront's French keys
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "balanced" | "equilibre" | "équilibré" => Some(GoalKey::Balanced),
            "weight_loss" | "perte_poids" | "perte de poids" | "minceur" => Some(GoalKey::WeightLoss),
            "muscle_gain" | "prise_masse" | "prise de masse" => Some(GoalKey::MuscleGain),
            _ => None,
        }
    }
}

impl std::fmt::Display for GoalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-serving nutrition target for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    pub calories_per_serving: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    /// Reference vegetable portion; vegetables are sized, not back-solved
    pub vegetables_grams: f64,
}

impl GoalProfile {
    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("calories_per_serving", self.calories_per_serving),
            ("protein_grams", self.protein_grams),
            ("carbs_grams", self.carbs_grams),
            ("fat_grams", self.fat_grams),
            ("vegetables_grams", self.vegetables_grams),
        ]
    }
}

/// Read-only table of goal profiles.
///
/// Built once and passed by reference to the solver and validator. Every
/// goal has an entry, so lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRegistry {
    pub balanced: GoalProfile,
    pub weight_loss: GoalProfile,
    pub muscle_gain: GoalProfile,
}

impl Default for GoalRegistry {
    fn default() -> Self {
        Self {
            balanced: GoalProfile {
                calories_per_serving: 550.0,
                protein_grams: 35.0,
                carbs_grams: 60.0,
                fat_grams: 18.0,
                vegetables_grams: 150.0,
            },
            weight_loss: GoalProfile {
                calories_per_serving: 420.0,
                protein_grams: 30.0,
                carbs_grams: 40.0,
                fat_grams: 12.0,
                vegetables_grams: 200.0,
            },
            muscle_gain: GoalProfile {
                calories_per_serving: 750.0,
                protein_grams: 45.0,
                carbs_grams: 85.0,
                fat_grams: 24.0,
                vegetables_grams: 150.0,
            },
        }
    }
}

impl GoalRegistry {
    /// Get the profile for a goal
    pub fn profile(&self, goal: GoalKey) -> &GoalProfile {
        match goal {
            GoalKey::Balanced => &self.balanced,
            GoalKey::WeightLoss => &self.weight_loss,
            GoalKey::MuscleGain => &self.muscle_gain,
        }
    }

    /// Iterate goals with their profiles in `GoalKey::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (GoalKey, &GoalProfile)> {
        GoalKey::ALL.into_iter().map(move |goal| (goal, self.profile(goal)))
    }

    /// Reject negative or non-finite targets. Zero is allowed and handled
    /// downstream as a degenerate target.
    pub fn validate(&self) -> Result<(), String> {
        for (goal, profile) in self.iter() {
            for (name, value) in profile.fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(format!("{}.{} must be a non-negative number, got {}", goal, name, value));
                }
            }
        }
        Ok(())
    }

    /// Whether calories and macros rise from weight_loss to balanced to muscle_gain
    pub fn is_monotonic(&self) -> bool {
        let ordered = [&self.weight_loss, &self.balanced, &self.muscle_gain];
        ordered.windows(2).all(|pair| {
            let (lo, hi) = (pair[0], pair[1]);
            lo.calories_per_serving <= hi.calories_per_serving
                && lo.protein_grams <= hi.protein_grams
                && lo.carbs_grams <= hi.carbs_grams
                && lo.fat_grams <= hi.fat_grams
        })
    }
}
