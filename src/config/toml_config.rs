use crate::core::ConfigProvider;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{
    validate_export_formats, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration, an alternative to CLI flags for repeatable runs.
///
/// ```toml
/// [league]
/// name = "ABC Premier League"
/// roster_path = "data/teams.csv"
///
/// [generation]
/// seed = 42
///
/// [export]
/// output_path = "./output"
/// formats = ["csv", "json", "zip"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub league: LeagueConfig,
    pub generation: Option<GenerationConfig>,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub roster_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
    pub formats: Vec<String>,
    pub export_invalid: Option<bool>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| FixtureError::ConfigError {
            message: format!("invalid config file {}: {e}", path.display()),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn roster_path(&self) -> &str {
        &self.league.roster_path
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn formats(&self) -> &[String] {
        &self.export.formats
    }

    fn seed(&self) -> Option<u64> {
        self.generation.as_ref().and_then(|g| g.seed)
    }

    fn export_invalid(&self) -> bool {
        self.export.export_invalid.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("league.name", &self.league.name)?;
        validate_path("league.roster_path", &self.league.roster_path)?;
        validate_non_empty_string("export.output_path", &self.export.output_path)?;
        validate_export_formats("export.formats", &self.export.formats)?;
        Ok(())
    }
}
