use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub duration_ms: u128,
    pub body: String,
}

impl HttpResponse {
    /// Decodes the body as a JSON object. Anything else, including valid JSON
    /// that is not an object, yields an empty map.
    pub fn json_object(&self) -> Map<String, Value> {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => Map::new(),
        }
    }

    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.status_text)
    }
}
