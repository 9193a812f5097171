//! Utility to preview the three goal variants of a recipe file
//!
//! Usage: preview_variants <recipe.json>
//!
//! The file holds a role assignment plus cooking metadata:
//! {"protein": {...}, "carbs": {...}, "vegetables": {...}, "extras": [],
//!  "cooking_instructions": [...], "prep_time_minutes": 20, "difficulty": "easy"}

use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use nutrimix::config::{self, DEFAULT_LOG_DIRECTIVE};
use nutrimix::models::CookingMetadata;
use nutrimix::nutrition::RoleAssignment;
use nutrimix::tools::calculator;

#[derive(Debug, Deserialize)]
struct RecipeFile {
    #[serde(flatten)]
    assignment: RoleAssignment,
    #[serde(flatten)]
    metadata: CookingMetadata,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: preview_variants <recipe.json>")?;

    let (registry, source) = config::load_registry()?;
    eprintln!("Goal profiles: {:?}", source);

    let contents = std::fs::read_to_string(&path)?;
    let recipe: RecipeFile = serde_json::from_str(&contents)?;

    let response = calculator::generate_variants(&registry, recipe.assignment, recipe.metadata)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
