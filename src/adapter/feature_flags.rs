//! Feature flag evaluations reported alongside RUM sessions.

use serde_json::{Map, Value};

use crate::error::{LoggingError, LoggingResult};

/// Parse a JSON object of `{flag: value}` evaluations.
pub fn parse_feature_flags(raw: &str) -> LoggingResult<Vec<(String, Value)>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| LoggingError::FeatureFlags(e.to_string()))?;
    match value {
        Value::Object(flags) => Ok(flags.into_iter().collect()),
        other => Err(LoggingError::FeatureFlags(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
    }
}

/// Parse a JSON object of extra runtime versions.
pub(crate) fn parse_object(raw: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected a JSON object, got {}", kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
