use crate::core::Pipeline;
use crate::core::Violation;
use crate::domain::model::FixtureSet;
use crate::utils::error::Result;

/// Outcome of a full pipeline run. `output_path` is `None` when export was
/// withheld because the schedule failed validation.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: Option<String>,
    pub fixtures: FixtureSet,
    pub violations: Vec<Violation>,
}

pub struct FixtureEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FixtureEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Loading roster...");
        let roster = self.pipeline.extract().await?;
        tracing::info!("Loaded {} teams", roster.len());

        tracing::info!("Generating fixtures...");
        let result = self.pipeline.transform(roster).await?;
        tracing::info!(
            "Scheduled {} matches across {} weekends",
            result.fixtures.matches.len(),
            result.fixtures.weekend_count
        );
        if result.violations.is_empty() {
            tracing::info!("Validation passed");
        } else {
            tracing::warn!("{} validation violation(s) detected", result.violations.len());
        }

        let fixtures = result.fixtures.clone();
        let violations = result.violations.clone();

        tracing::info!("Exporting fixtures...");
        let output_path = self.pipeline.load(result).await?;
        match &output_path {
            Some(path) => tracing::info!("Output saved to: {path}"),
            None => tracing::warn!("Export skipped"),
        }

        Ok(RunReport {
            output_path,
            fixtures,
            violations,
        })
    }
}
