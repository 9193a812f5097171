//! Nutrition calculation module
//!
//! Solves per-goal ingredient quantities, aggregates recipe nutrition,
//! validates it against goal targets and builds recipe variants.

pub mod aggregator;
pub mod error;
pub mod solver;
pub mod validator;
pub mod variants;

pub use aggregator::{aggregate, Contribution};
pub use error::{CalcError, CalcResult};
pub use solver::{solve, solve_for_goal, RoleQuantity, CONDIMENT_REFERENCE_G, FALLBACK_QUANTITY_G};
pub use validator::{
    deviation_pct, validate, Deviations, Severity, ValidationResult, ACCEPTABLE_DEVIATION_PCT,
    DEGENERATE_DEVIATION_PCT, WARNING_DEVIATION_PCT,
};
pub use variants::{generate, resolve, variants_from_resolved, ResolvedIngredient, RoleAssignment};
