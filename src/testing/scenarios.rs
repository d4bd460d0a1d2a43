use chrono::{DateTime, Local, TimeZone};
use serde_json::json;
use tracing::debug;

use crate::http::method::HttpMethod;

use super::TestHarness;
use super::report::RunReport;

/// Client name for a freshly created status check, unique per wall-clock second.
pub fn client_name_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("test_client_{}", now.format("%H%M%S"))
}

pub fn client_name() -> String {
    client_name_at(&Local::now())
}

impl TestHarness {
    pub async fn test_root_endpoint(&mut self) -> bool {
        let result = self.run_test("Root API Endpoint", HttpMethod::Get, "", 200, None).await;
        if let Some(message) = result.body.get("message") {
            debug!(%message, "root endpoint greeting");
        }
        result.success
    }

    pub async fn test_status_check(&mut self) -> bool {
        let payload = json!({ "client_name": client_name() });
        self.run_test("Create Status Check", HttpMethod::Post, "status", 200, Some(payload))
            .await
            .success
    }

    /// Only the status code is checked; the listed records are not inspected.
    pub async fn test_get_status_checks(&mut self) -> bool {
        self.run_test("Get Status Checks", HttpMethod::Get, "status", 200, None)
            .await
            .success
    }

    /// Root, then create, then list. Every scenario runs regardless of earlier failures.
    pub async fn run_suite(&mut self) -> RunReport {
        self.test_root_endpoint().await;
        self.test_status_check().await;
        self.test_get_status_checks().await;

        let report = self.report();
        report.print_summary();
        report
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mockito::{Matcher, Server};

    use super::*;
    use crate::testing::HarnessConfig;

    fn harness_for(base_url: String) -> TestHarness {
        TestHarness::new(&HarnessConfig {
            base_url,
            timeout: None,
        })
        .unwrap()
    }

    #[test]
    fn client_name_uses_clock_time() {
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 9, 5, 7).unwrap();
        assert_eq!(client_name_at(&at), "test_client_090507");
    }

    #[test]
    fn client_names_differ_across_seconds() {
        let first = Utc.with_ymd_and_hms(2026, 10, 14, 9, 5, 7).unwrap();
        let second = first + chrono::Duration::seconds(1);
        assert_ne!(client_name_at(&first), client_name_at(&second));
    }

    #[tokio::test]
    async fn all_endpoints_healthy() {
        let mut server = Server::new_async().await;
        let root = server
            .mock("GET", "/api/")
            .with_status(200)
            .with_body(r#"{"message":"Hello World"}"#)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/api/status")
            .match_body(Matcher::Regex(r#""client_name":"test_client_\d{6}""#.to_string()))
            .with_status(200)
            .with_body(r#"{"id":"abc","client_name":"test_client_000000"}"#)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/api/status")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let mut harness = harness_for(server.url());
        let report = harness.run_suite().await;

        root.assert_async().await;
        create.assert_async().await;
        list.assert_async().await;
        assert_eq!((report.passed, report.total), (3, 3));
        assert_eq!(report.exit_status(), 0);
    }

    #[tokio::test]
    async fn missing_root_fails_one_of_three() {
        let mut server = Server::new_async().await;
        server.mock("GET", "/api/").with_status(404).create_async().await;
        server.mock("POST", "/api/status").with_status(200).create_async().await;
        server.mock("GET", "/api/status").with_status(200).create_async().await;

        let mut harness = harness_for(server.url());
        let report = harness.run_suite().await;

        assert_eq!((report.passed, report.total), (2, 3));
        assert_eq!(report.exit_status(), 1);
        assert!(!report.results[0].passed);
        assert_eq!(report.results[0].actual_status, Some(404));
    }

    #[tokio::test]
    async fn unreachable_service_runs_every_scenario() {
        let mut harness = harness_for("http://127.0.0.1:1".to_string());

        assert!(!harness.test_root_endpoint().await);
        assert_eq!(harness.tests_run(), 1);
        assert!(!harness.test_status_check().await);
        assert_eq!(harness.tests_run(), 2);
        assert!(!harness.test_get_status_checks().await);
        assert_eq!(harness.tests_run(), 3);

        let report = harness.report();
        assert_eq!(report.passed, 0);
        assert!(report.results.iter().all(|r| r.error.is_some()));
        assert_eq!(report.exit_status(), 1);
    }
}
