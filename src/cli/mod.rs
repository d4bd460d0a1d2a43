//! # CLI
//!
//! Runs the smoke suite from the command line. With no arguments the suite
//! targets the built-in base URL and prints a text summary.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::testing::{DEFAULT_BASE_URL, HarnessConfig};

/// CLI configuration parsed from command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "statuscheck", version, about = "Smoke-test the status check API")]
pub struct CliConfig {
    /// Root address the `/api/...` endpoints are resolved against.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Also write the run report as JSON to this file.
    #[arg(long = "report")]
    pub report_path: Option<PathBuf>,

    /// Per-request timeout in milliseconds. Unset means the client default.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl CliConfig {
    pub fn harness_config(&self) -> HarnessConfig {
        HarnessConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Output format for CLI reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let config = CliConfig::try_parse_from(["statuscheck"]).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.report_path.is_none());
        assert!(config.harness_config().timeout.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = CliConfig::try_parse_from([
            "statuscheck",
            "--base-url",
            "http://localhost:8001",
            "--format",
            "json",
            "--report",
            "out/report.json",
            "--timeout-ms",
            "2500",
        ])
        .unwrap();

        let harness = config.harness_config();
        assert_eq!(harness.base_url, "http://localhost:8001");
        assert_eq!(harness.timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.report_path, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["statuscheck", "--format", "xml"]).is_err());
    }
}
