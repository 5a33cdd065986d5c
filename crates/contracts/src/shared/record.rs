//! Untyped entity records
//!
//! Both wire records (as exchanged with the backend) and UI records (as held
//! by a form session) are plain JSON objects keyed by field name.

use serde_json::{Map, Value};

/// JSON object keyed by field name
pub type Record = Map<String, Value>;

/// Build a record from `(name, value)` pairs
pub fn record_from<I, K>(pairs: I) -> Record
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Short human-readable name of a JSON value kind (used in error messages)
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integer view of a field, accepting numeric strings as well
pub fn field_as_i64(record: &Record, field: &str) -> Option<i64> {
    match record.get(field)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Treats null, empty strings and empty arrays as "no value"
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_as_i64() {
        let rec = record_from([("status", json!(101)), ("text", json!(" 7 "))]);
        assert_eq!(field_as_i64(&rec, "status"), Some(101));
        assert_eq!(field_as_i64(&rec, "text"), Some(7));
        assert_eq!(field_as_i64(&rec, "missing"), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(null))));
        assert!(is_blank(Some(&json!("  "))));
        assert!(is_blank(Some(&json!([]))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!("a"))));
    }
}
