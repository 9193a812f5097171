//! Target validation
//!
//! Compares aggregated nutrition with a goal profile and classifies how far
//! off it landed.

use serde::{Deserialize, Serialize};

use crate::models::{AggregatedNutrition, GoalKey, GoalRegistry};

/// Largest absolute deviation (percent) still counted as on target
pub const ACCEPTABLE_DEVIATION_PCT: f64 = 5.0;

/// Largest absolute deviation (percent) before a result is critical
pub const WARNING_DEVIATION_PCT: f64 = 15.0;

/// Deviation reported against a zero target when the actual value is not zero
pub const DEGENERATE_DEVIATION_PCT: f64 = 1000.0;

/// How far a result is from its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Acceptable,
    Warning,
    Critical,
}

impl Severity {
    /// Band for an absolute deviation in percent
    pub fn from_deviation(abs_pct: f64) -> Self {
        if abs_pct <= ACCEPTABLE_DEVIATION_PCT {
            Severity::Acceptable
        } else if abs_pct <= WARNING_DEVIATION_PCT {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Acceptable => "acceptable",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// Signed deviations in percent; positive means over target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deviations {
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    /// Reported for display only; does not gate validity
    pub fat_pct: f64,
}

impl Deviations {
    /// Deviations that decide validity
    pub fn gated(&self) -> [f64; 3] {
        [self.calories_pct, self.protein_pct, self.carbs_pct]
    }

    /// Largest absolute gated deviation
    pub fn max_abs_gated(&self) -> f64 {
        self.gated().iter().fold(0.0, |acc: f64, d| acc.max(d.abs()))
    }

    /// Copy rounded to whole percent, for display
    pub fn rounded(&self) -> Self {
        Self {
            calories_pct: self.calories_pct.round(),
            protein_pct: self.protein_pct.round(),
            carbs_pct: self.carbs_pct.round(),
            fat_pct: self.fat_pct.round(),
        }
    }
}

/// Outcome of checking a dish against a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub deviations: Deviations,
    /// Band of the largest gated deviation
    pub severity: Severity,
}

/// Signed percentage deviation of `actual` from `target`.
///
/// A zero target yields 0 when `actual` is also zero, otherwise
/// `DEGENERATE_DEVIATION_PCT` carrying the sign of `actual`. Any other
/// non-finite outcome is reported as `DEGENERATE_DEVIATION_PCT` too.
pub fn deviation_pct(actual: f64, target: f64) -> f64 {
    if target == 0.0 {
        if actual == 0.0 {
            return 0.0;
        }
        return DEGENERATE_DEVIATION_PCT.copysign(actual);
    }
    let pct = (actual - target) / target * 100.0;
    if pct.is_finite() {
        pct
    } else if pct.is_nan() {
        DEGENERATE_DEVIATION_PCT
    } else {
        DEGENERATE_DEVIATION_PCT.copysign(pct)
    }
}

/// Validate nutrition against the profile of `goal`
pub fn validate(nutrition: &AggregatedNutrition, goal: GoalKey, registry: &GoalRegistry) -> ValidationResult {
    let target = registry.profile(goal);

    let deviations = Deviations {
        calories_pct: deviation_pct(nutrition.calories, target.calories_per_serving),
        protein_pct: deviation_pct(nutrition.protein_g, target.protein_grams),
        carbs_pct: deviation_pct(nutrition.carbs_g, target.carbs_grams),
        fat_pct: deviation_pct(nutrition.fat_g, target.fat_grams),
    };

    let valid = deviations
        .gated()
        .iter()
        .all(|d| d.abs() <= ACCEPTABLE_DEVIATION_PCT);

    ValidationResult {
        valid,
        deviations,
        severity: Severity::from_deviation(deviations.max_abs_gated()),
    }
}
