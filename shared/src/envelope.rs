//! Turns a raw HTTP exchange into a typed response or a [`RequestError`].
//!
//! Every endpoint may answer with `{"error": "..."}` regardless of status, so
//! the body is always decoded as JSON first and inspected for that field
//! before it is bound to the success shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RequestError;

/// Decode `body` received with HTTP `status`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RequestError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| RequestError::malformed(e.to_string()))?;

    let ok = (200..300).contains(&status);
    if let Some(message) = error_message(&value) {
        return Err(RequestError::Rejected { status, message });
    }
    if !ok {
        return Err(RequestError::http_status(status));
    }

    serde_json::from_value(value).map_err(|e| RequestError::malformed(e.to_string()))
}

/// The body's `error` indicator, when it carries one.
///
/// Absent, `null`, `false`, `0` and `""` do not count as errors; other
/// non-string values are rendered as JSON text.
fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
