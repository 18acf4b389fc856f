pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::engine::{FixtureEngine, RunReport};
pub use core::generator::{validate_roster, FixtureGenerator};
pub use core::pipeline::FixturePipeline;
pub use core::validator::{validate_schedule, Violation, ViolationKind};
pub use domain::model::{FixtureSet, ScheduledMatch, Team};
pub use domain::ports::{ConfigProvider, Pipeline, Storage};
pub use utils::error::{FixtureError, Result};
