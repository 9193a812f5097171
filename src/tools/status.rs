//! Nutrimix Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::RegistrySource;

/// Recipe calculator instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Nutrimix Recipe Calculator Instructions

Nutrimix sizes the ingredients of a three-part meal for each fitness goal and
checks how close the dish lands to the goal's nutrition target.

## Goals

| Key | Label | Intent |
|-----|-------|--------|
| `balanced` | Équilibré | Everyday maintenance |
| `weight_loss` | Perte de poids | Fewer calories, more vegetables |
| `muscle_gain` | Prise de masse | More protein and carbs |

Call `list_goal_profiles` to see the active per-serving targets.

## Roles

Every recipe fills three roles:
1. **protein** - sized so the dish hits the goal's protein grams
2. **carbs** - sized so the dish hits the goal's carb grams
3. **vegetables** - a fixed reference portion per goal

Optional extras (fat or condiment only; other roles are rejected):
- **fat** (oil, butter) - sized against the goal's fat grams
- **condiment** (sauce, spices) - always 10g

If an ingredient has 0g of the macro its role targets, it gets a 100g fallback.

## Nutrition Facts

All facts are **per 100g** (or per 100ml for liquids):
- `calories`, `protein_g`, `carbs_g`, `fat_g` are required
- `fiber_g`, `sugar_g`, `sodium_mg` are optional

## Tools

- `solve_quantities` - grams of one ingredient for each goal
- `aggregate_nutrition` - total nutrition of explicit (role, grams, facts) lines
- `validate_nutrition` - deviation of a nutrition total from a goal
- `generate_recipe_variants` - all three goal variants of a recipe at once

## Reading Validation

Deviation = (actual - target) / target × 100, positive means over target.

| Largest deviation (calories, protein, carbs) | Severity |
|----------------------------------------------|----------|
| ≤ 5% | acceptable (valid) |
| 5% - 15% | warning |
| > 15% | critical |

Fat deviation is reported but does not affect validity.

## Notes

- Every ingredient in a recipe needs nutrition facts, otherwise generation fails
- Quantities are whole grams; variant nutrition is computed from those grams
- `recipe_ingredients` in the generation response holds the
  `quantity_equilibre` / `quantity_perte_poids` / `quantity_prise_masse` values to store
"#;

/// Runtime status of the Nutrimix service
#[derive(Debug, Clone, Serialize)]
pub struct NutrimixStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Where goal profiles were loaded from
    pub goal_profiles: RegistrySource,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    registry_source: RegistrySource,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(registry_source: RegistrySource) -> Self {
        Self {
            start_time: Instant::now(),
            registry_source,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> NutrimixStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutrimixStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            goal_profiles: self.registry_source.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
