use serde_json::Value;
use thiserror::Error;

use crate::cases::value_to_text;

/// A failed search call, as reported by the client adapter.
///
/// Every field is optional because failures come from different layers
/// (API rejections carry a status and body, transport failures carry
/// neither).
#[derive(Debug, Clone, Error)]
#[error("{}", self.reason())]
pub struct SearchFailure {
    /// Failure category name, used when nothing more specific is known
    pub kind: String,
    pub status: Option<u16>,
    pub code: Option<String>,
    pub body: Option<Value>,
}

impl SearchFailure {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            status: None,
            code: None,
            body: None,
        }
    }

    /// Non-2xx answer from the API
    pub fn api(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
            ..Self::new("ApiError")
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// `status / code / message` with whichever parts are present,
    /// or the failure kind when none are
    pub fn reason(&self) -> String {
        let message = match &self.body {
            Some(Value::Object(body)) => ["message", "detail"]
                .iter()
                .filter_map(|key| body.get(*key))
                .find(|v| is_truthy(v))
                .and_then(value_to_text),
            _ => None,
        };

        let parts: Vec<String> = [
            self.status.filter(|s| *s != 0).map(|s| s.to_string()),
            self.code.clone().filter(|c| !c.is_empty()),
            message,
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            self.kind.clone()
        } else {
            parts.join(" / ")
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
