use crate::core::generator::FixtureGenerator;
use crate::core::validator::validate_schedule;
use crate::core::{ConfigProvider, Pipeline, Storage, Team, TransformResult};
use crate::utils::error::{FixtureError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const CSV_FILENAME: &str = "fixtures.csv";
pub const JSON_FILENAME: &str = "fixtures.json";
pub const ZIP_FILENAME: &str = "fixtures.zip";

/// Load roster → generate schedule → export. The core stays pure; all I/O
/// goes through the injected `Storage`.
pub struct FixturePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FixturePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, name: &str) -> String {
        format!("{}/{}", self.config.output_path(), name)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FixturePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Team>> {
        tracing::debug!("Reading roster from: {}", self.config.roster_path());
        let raw = self.storage.read_file(self.config.roster_path()).await?;

        let mut reader = csv::Reader::from_reader(raw.as_slice());
        let mut teams = Vec::new();
        for row in reader.deserialize() {
            let team: Team = row?;
            teams.push(team);
        }

        tracing::debug!("Roster contains {} teams", teams.len());
        Ok(teams)
    }

    async fn transform(&self, roster: Vec<Team>) -> Result<TransformResult> {
        let generator = FixtureGenerator::new(roster)?;

        let mut rng = match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Shuffling with fixed seed {seed}");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };
        let fixtures = generator.generate(&mut rng);

        let violations = validate_schedule(&fixtures.matches, generator.teams());
        for violation in &violations {
            tracing::warn!("Schedule violation: {violation}");
        }

        let csv_output = render_csv(&fixtures.matches)?;
        let json_output = serde_json::to_string_pretty(&fixtures.matches)?;

        Ok(TransformResult {
            fixtures,
            violations,
            csv_output,
            json_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Option<String>> {
        if !result.violations.is_empty() && !self.config.export_invalid() {
            tracing::warn!(
                "Withholding export: {} validation violation(s)",
                result.violations.len()
            );
            return Ok(None);
        }

        for format in self.config.formats() {
            match format.as_str() {
                "csv" => {
                    self.storage
                        .write_file(&self.output_file(CSV_FILENAME), result.csv_output.as_bytes())
                        .await?;
                }
                "json" => {
                    self.storage
                        .write_file(
                            &self.output_file(JSON_FILENAME),
                            result.json_output.as_bytes(),
                        )
                        .await?;
                }
                "zip" => {
                    let bundle = build_zip_bundle(&result)?;
                    self.storage
                        .write_file(&self.output_file(ZIP_FILENAME), &bundle)
                        .await?;
                }
                other => {
                    return Err(FixtureError::ConfigError {
                        message: format!("unsupported export format: {other}"),
                    });
                }
            }
            tracing::debug!("Exported {format} output");
        }

        Ok(Some(self.config.output_path().to_string()))
    }
}

fn render_csv(matches: &[crate::domain::model::ScheduledMatch]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for m in matches {
        writer.serialize(m)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FixtureError::ProcessingError {
            message: format!("CSV buffer error: {e}"),
        })?;
    String::from_utf8(bytes).map_err(|e| FixtureError::ProcessingError {
        message: format!("CSV output was not valid UTF-8: {e}"),
    })
}

/// Bundles the CSV and JSON payloads into a single ZIP archive.
fn build_zip_bundle(result: &TransformResult) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    zip.start_file::<_, ()>(CSV_FILENAME, FileOptions::default())?;
    zip.write_all(result.csv_output.as_bytes())?;

    zip.start_file::<_, ()>(JSON_FILENAME, FileOptions::default())?;
    zip.write_all(result.json_output.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
