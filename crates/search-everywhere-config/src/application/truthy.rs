//! Host-style truthiness of settings values.
//!
//! The editor's scripting host treats `null`, `false`, `0` and `""` as
//! "falsy".  Arrays and objects are always truthy, even when empty.

use serde_json::Value;

/// Returns `true` when `value` counts as set under the host's rules.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
