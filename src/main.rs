use clap::Parser;
use league_fixtures::utils::{logger, table, validation::Validate};
use league_fixtures::{
    CliConfig, ConfigProvider, FixtureEngine, FixturePipeline, LocalStorage, RunReport, TomlConfig,
};

async fn run_pipeline<C: ConfigProvider>(config: C) -> league_fixtures::Result<RunReport> {
    let storage = LocalStorage::new(".".to_string());
    let pipeline = FixturePipeline::new(storage, config);
    FixtureEngine::new(pipeline).run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting league-fixtures CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let run = match config.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {path}");
            let file_config = match TomlConfig::from_file(&path) {
                Ok(file_config) => file_config,
                Err(e) => {
                    tracing::error!("Failed to load config file: {e}");
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = file_config.validate() {
                tracing::error!("Configuration validation failed: {e}");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            run_pipeline(file_config).await
        }
        None => {
            if let Err(e) = config.validate() {
                tracing::error!("Configuration validation failed: {e}");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            run_pipeline(config).await
        }
    };

    let report = match run {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Fixture run failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", table::render_matches(&report.fixtures.matches));
    println!();

    if report.violations.is_empty() {
        println!("Validation passed: no violations detected.");
    } else {
        eprintln!("Validation violations:");
        for violation in &report.violations {
            eprintln!("- {violation}");
        }
    }

    match report.output_path {
        Some(path) => println!("Fixtures exported to {path}"),
        None => {
            eprintln!("Cannot export invalid fixtures");
            std::process::exit(2);
        }
    }

    Ok(())
}
