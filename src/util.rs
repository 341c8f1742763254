use serde_json::{Number, Value};

/// Render a value the way it reads when used as a member name.
///
/// Strings pass through untouched; integral numbers drop any fractional
/// suffix so `31` and `31.0` name the same member.
pub fn property_name(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

pub fn number_text(number: &Number) -> String {
    if number.is_f64() {
        if let Some(float) = number.as_f64() {
            if float.fract() == 0.0 && float.abs() < 1e21 {
                return format!("{float:.0}");
            }
            return float.to_string();
        }
    }
    number.to_string()
}

/// Type-sensitive equality: `"31"` never equals `31`, but `31` equals `31.0`.
///
/// Lists and objects never compare equal; they have no identity to match on.
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Short name of a JSON value's kind, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
