pub mod auth;
pub mod players;
pub mod teams;

use serde_json::Value;

/// Reads a submitted field as text, so that `7` and `"7"` are treated
/// alike. Missing fields and values that are neither strings nor numbers
/// become an empty string and fail the required-field check.
pub(crate) fn field_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
