mod cli;
mod error;
mod http;
mod testing;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{CliConfig, OutputFormat};
use testing::TestHarness;

/// Report file could not be written; distinct from failing tests.
const EXIT_REPORT_ERROR: u8 = 2;

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(run(config))
}

async fn run(config: CliConfig) -> Result<ExitCode> {
    let mut harness = TestHarness::new(&config.harness_config())
        .with_context(|| format!("Cannot set up tests against {}", config.base_url))?;
    info!(base_url = %config.base_url, "running API smoke tests");

    let report = harness.run_suite().await;

    if config.output_format == OutputFormat::Json {
        println!("{}", report.to_json_pretty()?);
    }

    if let Some(path) = &config.report_path {
        if let Err(err) = report.write_json(path) {
            error!(error = %err, "could not write run report");
            return Ok(ExitCode::from(EXIT_REPORT_ERROR));
        }
        info!(path = %path.display(), "run report written");
    }

    Ok(ExitCode::from(report.exit_status()))
}
