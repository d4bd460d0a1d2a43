use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::debug;

use crate::error::{HarnessError, Result};

use super::request::RequestSpec;
use super::response::HttpResponse;

const API_PREFIX: &str = "api";

/// HTTP access to the service under test, rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        reqwest::Url::parse(base_url).map_err(|e| HarnessError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout.filter(|t| !t.is_zero()) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HarnessError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base_url>/api/<endpoint>`. An empty endpoint resolves to `/api/`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{API_PREFIX}/{endpoint}", self.base_url)
    }

    pub async fn send(&self, request: &RequestSpec) -> Result<HttpResponse> {
        let url = self.endpoint_url(&request.endpoint);
        debug!(method = %request.method, %url, "sending request");

        let mut req_builder = self
            .client
            .request(request.method.into(), url.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(payload) = request.body() {
            req_builder = req_builder.json(payload);
        }

        let started = Instant::now();
        let response = req_builder.send().await.map_err(HarnessError::Transport)?;
        let elapsed = started.elapsed().as_millis();

        let status = response.status();
        let bytes = response.bytes().await.map_err(HarnessError::ReadBody)?;
        debug!(
            status = status.as_u16(),
            elapsed_ms = elapsed as u64,
            size = bytes.len(),
            "received response"
        );

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            duration_ms: elapsed,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
