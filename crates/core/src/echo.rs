//! Echo classification for `POST /echo`.
//!
//! A request body is echoed back either structurally (when it is a JSON object
//! or array) or verbatim as a string (everything else). Classification is a
//! total function: there is no input for which it fails.

use serde::Serialize;
use serde_json::Value;

/// Value placed under the `echo` key of the `/echo` response.
///
/// Serialized untagged: `RawString` becomes a JSON string and
/// `StructuredJson` is embedded as-is (not as an escaped string).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EchoResult {
    RawString(String),
    StructuredJson(Value),
}

impl EchoResult {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RawString(_) => "raw",
            Self::StructuredJson(_) => "structured",
        }
    }
}

/// Decide how a request body is echoed.
///
/// Numbers inside structured bodies keep their original digits, so integers
/// wider than 64 bits and long decimals come back unchanged.
///
/// - empty or all-whitespace body: `RawString("")`
/// - body parsing to a JSON object or array: `StructuredJson(parsed)`
/// - anything else (parse failure, scalar JSON such as `42`, `"s"`, `null`):
///   `RawString(body)` with the body unchanged
pub fn classify(body: &str) -> EchoResult {
    if body.trim().is_empty() {
        return EchoResult::RawString(String::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => EchoResult::StructuredJson(value),
        Ok(_) | Err(_) => EchoResult::RawString(body.to_owned()),
    }
}
