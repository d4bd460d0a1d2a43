use serde_json::Value;

use super::method::HttpMethod;

/// One call against the service, built per test case and then dropped.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub endpoint: String,
    pub expected_status: u16,
    pub payload: Option<Value>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>, expected_status: u16) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            expected_status,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Option<Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Payload to serialize into the request body. GET never carries one.
    pub fn body(&self) -> Option<&Value> {
        if self.method.sends_body() {
            self.payload.as_ref()
        } else {
            None
        }
    }
}
