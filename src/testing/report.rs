use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{HarnessError, Result};
use crate::http::method::HttpMethod;
use crate::http::request::RequestSpec;

/// Outcome of one `run_test` call, kept for the run report.
#[derive(Debug, Clone, Serialize)]
pub struct TestCaseRecord {
    pub name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub expected_status: u16,
    /// `None` when no response was received.
    pub actual_status: Option<u16>,
    pub passed: bool,
    pub duration_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestCaseRecord {
    pub fn new(name: &str, request: &RequestSpec) -> Self {
        Self {
            name: name.to_string(),
            method: request.method,
            endpoint: request.endpoint.clone(),
            expected_status: request.expected_status,
            actual_status: None,
            passed: false,
            duration_ms: 0,
            error: None,
        }
    }
}

/// Summary report for a suite run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u128,
    pub results: Vec<TestCaseRecord>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Process exit status: 0 when every test passed, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let verdict = if self.all_passed() {
            "✅ All backend API tests passed!"
        } else {
            "❌ Some backend API tests failed"
        };
        vec![
            format!("📊 Tests passed: {}/{}", self.passed, self.total),
            verdict.to_string(),
        ]
    }

    pub fn print_summary(&self) {
        println!();
        for line in self.summary_lines() {
            println!("{line}");
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| HarnessError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
    }
}
