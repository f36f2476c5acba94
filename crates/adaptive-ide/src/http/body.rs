//! Lenient request body parsing
//!
//! Bodies are read field by field, so a badly typed field only drops that
//! field. Bodies that are not JSON objects at all count as empty requests.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{GradeRequest, RunRequest, TraceRequest};

/// A request that can be assembled from whatever fields of a JSON object are usable
pub trait LenientBody: Default {
    fn from_fields(fields: &Map<String, Value>) -> Self;
}

/// Parse a body, treating anything that isn't a JSON object as an empty request
pub fn lenient<T: LenientBody>(body: &[u8]) -> T {
    if body.is_empty() {
        return T::default();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => T::from_fields(&fields),
        Ok(other) => {
            debug!("ignoring non-object request body: {other}");
            T::default()
        }
        Err(err) => {
            debug!("ignoring malformed request body: {err}");
            T::default()
        }
    }
}

/// String field; any other type counts as absent
fn string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!(key, "ignoring non-string field: {other}");
            None
        }
    }
}

/// Truthy scalar rendered as text; `""`, `0`, `false` and null count as absent
fn scalar_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}

/// Field deserialized on its own; a value of the wrong shape counts as absent
fn typed<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key).filter(|v| !v.is_null())?;
    serde_json::from_value(value.clone())
        .inspect_err(|err| debug!(key, "ignoring malformed field: {err}"))
        .ok()
}

impl LenientBody for RunRequest {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            language: string(fields, "language"),
            code: string(fields, "code"),
            stdin: scalar_text(fields, "stdin"),
            problem_id: string(fields, "problemId"),
            test: typed(fields, "test"),
        }
    }
}

impl LenientBody for GradeRequest {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            language: string(fields, "language"),
            code: string(fields, "code"),
            problem_id: string(fields, "problemId"),
        }
    }
}

impl LenientBody for TraceRequest {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            language: string(fields, "language"),
            code: string(fields, "code"),
            problem_id: string(fields, "problemId"),
        }
    }
}
