pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_export_formats, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "league-fixtures"),
    command(about = "Double round-robin fixture generator for a 10-team league")
)]
pub struct CliConfig {
    /// TOML configuration file; overrides the path and generation flags below
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Roster CSV with Team, Town and Stadium columns
    #[cfg_attr(feature = "cli", arg(long, default_value = "data/teams.csv"))]
    pub roster_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Export formats to write (csv, json, zip)
    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', default_values_t = default_formats())
    )]
    pub formats: Vec<String>,

    /// Fixed shuffle seed for reproducible schedules
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    /// Export even when validation reports violations
    #[cfg_attr(feature = "cli", arg(long))]
    pub export_invalid: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(long))]
    pub verbose: bool,
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string(), "json".to_string(), "zip".to_string()]
}

impl ConfigProvider for CliConfig {
    fn roster_path(&self) -> &str {
        &self.roster_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn formats(&self) -> &[String] {
        &self.formats
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn export_invalid(&self) -> bool {
        self.export_invalid
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("roster_path", &self.roster_path)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_export_formats("formats", &self.formats)?;
        Ok(())
    }
}
