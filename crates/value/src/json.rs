//! Conversion from `serde_json` documents.

use crate::types::{Scalar, Value};

/// Builds a fresh tree from a JSON document.
///
/// Object entries keep document order. Integers that fit `i64` become
/// [`Scalar::Int`]; every other number becomes [`Scalar::Float`].
impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Scalar(Scalar::Int(i)),
                None => Value::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::Scalar(Scalar::Str(s.clone())),
            serde_json::Value::Array(arr) => Value::seq(arr.iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::from_entries(obj.iter().map(|(k, v)| (k.clone(), Value::from(v))))
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from(&value)
    }
}
