//! Content API response envelope.
//!
//! Most endpoints wrap the page in `{ "success": bool, "message"?: string,
//! "data": {...} }`. Some return the page object directly. [`unwrap_payload`]
//! accepts both and yields the page object.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ContentError;

/// The `{success, message, data}` wrapper.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Extract the page object from a decoded response body.
///
/// - An object with a `success` key is read as an [`Envelope`]. A false
///   `success` is an error carrying the envelope message. A missing or
///   `null` `data` yields an empty object.
/// - Any other object is taken as the page itself.
/// - Anything else is a shape error.
pub fn unwrap_payload(body: Value) -> Result<Value, ContentError> {
    let map = match body {
        Value::Object(map) => map,
        other => {
            return Err(ContentError::Shape(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            )))
        }
    };

    if !map.contains_key("success") {
        return Ok(Value::Object(map));
    }

    let envelope: Envelope = serde_json::from_value(Value::Object(map))?;
    if !envelope.success {
        return Err(ContentError::Envelope {
            message: envelope
                .message
                .unwrap_or_else(|| "Failed to fetch page content".to_string()),
        });
    }

    match envelope.data {
        None | Some(Value::Null) => Ok(Value::Object(Map::new())),
        Some(data @ Value::Object(_)) => Ok(data),
        Some(other) => Err(ContentError::Shape(format!(
            "envelope data must be an object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
