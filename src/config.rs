//! Runtime configuration
//!
//! Goal profiles default to the built-in table and can be replaced by a JSON
//! file named in `NUTRIMIX_GOALS_PATH`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::models::GoalRegistry;

/// Environment variable holding the path of a custom goal-profile file
pub const GOALS_PATH_ENV: &str = "NUTRIMIX_GOALS_PATH";

/// Default log directive for the binaries
pub const DEFAULT_LOG_DIRECTIVE: &str = "nutrimix=info";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read goal profiles: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse goal profiles: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid goal profile: {0}")]
    InvalidProfile(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the active goal profiles came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum RegistrySource {
    BuiltIn,
    File(PathBuf),
}

/// Parse and check a goal-profile table
pub fn parse_registry(json: &str) -> ConfigResult<GoalRegistry> {
    let registry: GoalRegistry = serde_json::from_str(json)?;
    registry.validate().map_err(ConfigError::InvalidProfile)?;

    if !registry.is_monotonic() {
        tracing::warn!("Goal profiles do not rise from weight_loss to balanced to muscle_gain");
    }

    Ok(registry)
}

/// Load a goal-profile table from a JSON file
pub fn load_registry_from_path<P: AsRef<Path>>(path: P) -> ConfigResult<GoalRegistry> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_registry(&contents)
}

/// Get the goal-profile file path from the environment, if set
pub fn goals_path_from_env() -> Option<PathBuf> {
    std::env::var(GOALS_PATH_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Resolve the goal registry for this process
pub fn load_registry() -> ConfigResult<(GoalRegistry, RegistrySource)> {
    match goals_path_from_env() {
        Some(path) => {
            let registry = load_registry_from_path(&path)?;
            tracing::info!("Loaded goal profiles from {}", path.display());
            Ok((registry, RegistrySource::File(path)))
        }
        None => Ok((GoalRegistry::default(), RegistrySource::BuiltIn)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOM: &str = r#"{
        "balanced":    {"calories_per_serving": 600, "protein_grams": 40, "carbs_grams": 65, "fat_grams": 20, "vegetables_grams": 150},
        "weight_loss": {"calories_per_serving": 400, "protein_grams": 35, "carbs_grams": 30, "fat_grams": 12, "vegetables_grams": 220},
        "muscle_gain": {"calories_per_serving": 850, "protein_grams": 55, "carbs_grams": 95, "fat_grams": 26, "vegetables_grams": 120}
    }"#;

    #[test]
    fn test_parse_custom_registry() {
        let registry = parse_registry(CUSTOM).unwrap();
        assert_eq!(registry.muscle_gain.protein_grams, 55.0);
        assert_eq!(registry.weight_loss.vegetables_grams, 220.0);
    }

    #[test]
    fn test_parse_rejects_negative_target() {
        let json = CUSTOM.replace("\"fat_grams\": 12", "\"fat_grams\": -12");
        let err = parse_registry(&json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProfile(_)));
    }

    #[test]
    fn test_parse_rejects_missing_goal() {
        let json = r#"{"balanced": {"calories_per_serving": 600, "protein_grams": 40, "carbs_grams": 65, "fat_grams": 20, "vegetables_grams": 150}}"#;
        assert!(matches!(parse_registry(json).unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("nutrimix-goals-{}.json", std::process::id()));
        std::fs::write(&path, CUSTOM).unwrap();

        let registry = load_registry_from_path(&path).unwrap();
        assert_eq!(registry.balanced.calories_per_serving, 600.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_registry_from_path("/nonexistent/nutrimix/goals.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_registry_round_trips_as_config() {
        let json = serde_json::to_string(&GoalRegistry::default()).unwrap();
        assert_eq!(parse_registry(&json).unwrap(), GoalRegistry::default());
    }
}
