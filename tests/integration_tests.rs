use league_fixtures::{
    CliConfig, FixtureEngine, FixtureError, FixturePipeline, LocalStorage, RunReport,
    ScheduledMatch, TomlConfig,
};
use std::path::Path;
use tempfile::TempDir;

const ROSTER_CSV: &str = "\
Team,Town,Stadium
Harbor Rovers,Porton,Harbor Ground
Dockside Athletic,Porton,Quay Field
Hillcrest United,Overdale,Summit Stadium
Valley Wanderers,Overdale,Glen Park
Ironworks FC,Forgeham,Anvil Arena
Foundry Town,Forgeham,Furnace Field
Riverside Albion,Bridgewater,Weir Lane
Old Bridge FC,Bridgewater,Arch Stadium
Meadow Rangers,Greenfield,Pasture Park
Orchard City,Greenfield,Grove Ground
";

fn write_roster(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("teams.csv");
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn config_for(dir: &TempDir, roster_path: String) -> CliConfig {
    CliConfig {
        config: None,
        roster_path,
        output_path: dir.path().join("output").to_str().unwrap().to_string(),
        formats: vec!["csv".to_string(), "json".to_string(), "zip".to_string()],
        seed: Some(42),
        export_invalid: false,
        verbose: false,
    }
}

async fn run(config: CliConfig) -> league_fixtures::Result<RunReport> {
    let storage = LocalStorage::new(".".to_string());
    let pipeline = FixturePipeline::new(storage, config);
    FixtureEngine::new(pipeline).run().await
}

fn read_csv_matches(path: &Path) -> Vec<ScheduledMatch> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|row| row.unwrap()).collect()
}

#[tokio::test]
async fn test_end_to_end_generates_and_exports() {
    let dir = TempDir::new().unwrap();
    let roster_path = write_roster(&dir, ROSTER_CSV);
    let config = config_for(&dir, roster_path);
    let output_dir = config.output_path.clone();

    let report = run(config).await.unwrap();

    assert!(report.violations.is_empty());
    assert_eq!(report.fixtures.matches.len(), 90);
    assert!((45..=46).contains(&report.fixtures.weekend_count));
    assert_eq!(report.output_path.as_deref(), Some(output_dir.as_str()));

    let csv_path = Path::new(&output_dir).join("fixtures.csv");
    let matches = read_csv_matches(&csv_path);
    assert_eq!(matches.len(), 90);
    assert_eq!(matches[0].weekend, 1);

    let json_raw = std::fs::read_to_string(Path::new(&output_dir).join("fixtures.json")).unwrap();
    let parsed: Vec<ScheduledMatch> = serde_json::from_str(&json_raw).unwrap();
    assert_eq!(parsed, matches);

    let zip_raw = std::fs::read(Path::new(&output_dir).join("fixtures.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_raw)).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["fixtures.csv", "fixtures.json"]);
}

#[tokio::test]
async fn test_exported_csv_keeps_contract_headers() {
    let dir = TempDir::new().unwrap();
    let roster_path = write_roster(&dir, ROSTER_CSV);
    let config = config_for(&dir, roster_path);
    let output_dir = config.output_path.clone();

    run(config).await.unwrap();

    let raw = std::fs::read_to_string(Path::new(&output_dir).join("fixtures.csv")).unwrap();
    let header = raw.lines().next().unwrap();
    assert_eq!(header, "Weekend,Leg,Home Team,Away Team,Stadium,Town");
}

#[tokio::test]
async fn test_short_roster_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let nine_rows: String = ROSTER_CSV.lines().take(10).collect::<Vec<_>>().join("\n");
    let roster_path = write_roster(&dir, &nine_rows);
    let config = config_for(&dir, roster_path);
    let output_dir = config.output_path.clone();

    let err = run(config).await.unwrap_err();
    assert!(matches!(err, FixtureError::RosterShapeError { found: 9 }));
    assert!(!Path::new(&output_dir).exists());
}

#[tokio::test]
async fn test_lone_town_roster_fails() {
    let dir = TempDir::new().unwrap();
    let roster = ROSTER_CSV.replace("Orchard City,Greenfield", "Orchard City,Far Acre");
    let roster_path = write_roster(&dir, &roster);
    let config = config_for(&dir, roster_path);

    let err = run(config).await.unwrap_err();
    match err {
        FixtureError::TownCompositionError { town, count } => {
            assert!(town == "Greenfield" || town == "Far Acre");
            assert_eq!(count, 1);
        }
        other => panic!("expected TownCompositionError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_same_seed_runs_produce_identical_exports() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let config_a = config_for(&dir_a, write_roster(&dir_a, ROSTER_CSV));
    let config_b = config_for(&dir_b, write_roster(&dir_b, ROSTER_CSV));
    let out_a = config_a.output_path.clone();
    let out_b = config_b.output_path.clone();

    run(config_a).await.unwrap();
    run(config_b).await.unwrap();

    let csv_a = std::fs::read(Path::new(&out_a).join("fixtures.csv")).unwrap();
    let csv_b = std::fs::read(Path::new(&out_b).join("fixtures.csv")).unwrap();
    assert_eq!(csv_a, csv_b);
}

#[tokio::test]
async fn test_toml_config_drives_the_run() {
    let dir = TempDir::new().unwrap();
    let roster_path = write_roster(&dir, ROSTER_CSV);
    let output_dir = dir.path().join("toml_output").to_str().unwrap().to_string();

    let config_path = dir.path().join("league.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[league]
name = "ABC Premier League"
roster_path = "{roster_path}"

[generation]
seed = 7

[export]
output_path = "{output_dir}"
formats = ["csv"]
"#
        ),
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    let storage = LocalStorage::new(".".to_string());
    let pipeline = FixturePipeline::new(storage, config);
    let report = FixtureEngine::new(pipeline).run().await.unwrap();

    assert!(report.output_path.is_some());
    let matches = read_csv_matches(&Path::new(&output_dir).join("fixtures.csv"));
    assert_eq!(matches.len(), 90);
    assert!(!Path::new(&output_dir).join("fixtures.json").exists());
}
