use anyhow::Context;
use beacon_client::BeaconClient;
use beacon_compliance::{cli::Cli, config_manager::ConfigManager, ComplianceRunner};
use clap::Parser;
use flexi_logger::{FileSpec, Logger, WriteMode};
use log::{info, warn};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle config file creation
    if cli.create_config {
        ConfigManager::create_default_config(&cli.config)
            .with_context(|| format!("Failed to create config file {}", cli.config))?;
        println!("Created default configuration file: {}", cli.config);
        return Ok(());
    }

    // Load and merge configuration
    let mut config_manager = ConfigManager::load(&cli.config)
        .with_context(|| format!("Failed to load config file {}", cli.config))?;
    config_manager.merge_with_cli_args(&cli);

    let config = config_manager.get_config().clone();

    // Set up logging
    let mut logger =
        Logger::try_with_str(&config.environment.log_level)?.write_mode(WriteMode::BufferAndFlush);
    if cli.log_to_file {
        logger = logger.log_to_file(FileSpec::default());
    } else {
        logger = logger.log_to_stderr();
    }
    let _logger = logger.start()?;

    // Validate configuration
    if let Err(error) = config_manager.ensure_valid() {
        warn!("{}", error);
        return Err(error.into());
    }

    let url = cli
        .url
        .context("No Beacon url given, use --url or BEACON_URL")?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.environment.request_timeout_seconds))
        .build()
        .context("Failed to build HTTP client")?;
    let client = BeaconClient::with_client(http, &url)?;

    info!("Checking Beacon at {}", client.base_url());
    info!("  - Request timeout: {}s", config.environment.request_timeout_seconds);
    info!("  - Idempotency check: {}", config.compliance.check_idempotency);

    let report = ComplianceRunner::new(client, config.compliance).run().await;
    report.log_summary();

    if let Some(path) = &cli.report {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    if !report.passed() {
        anyhow::bail!(
            "{} of {} checks failed",
            report.failures().len(),
            report.outcomes.len()
        );
    }
    Ok(())
}
