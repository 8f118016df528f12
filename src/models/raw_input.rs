//! Untyped form input.
//!
//! A [`RawInput`] is whatever a single form field held when the user last
//! touched it. It carries no invariants; the normalizer turns it into a
//! finite number.

use serde_json::Value;

/// One user-entered field, before any coercion.
///
/// # Example
///
/// ```
/// use payroll_calc::models::RawInput;
///
/// assert_eq!(RawInput::from("12.5"), RawInput::Text("12.5".to_string()));
/// assert_eq!(RawInput::from(None::<f64>), RawInput::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawInput {
    /// A value that already arrived as a number (possibly NaN or infinite).
    Number(f64),
    /// Text typed into a field.
    Text(String),
    /// A checkbox-style boolean.
    Bool(bool),
    /// The field was absent or null.
    #[default]
    Missing,
    /// Anything else (arrays, objects).
    Other,
}

impl RawInput {
    /// Returns the text of a [`RawInput::Text`] value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawInput::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<f32> for RawInput {
    fn from(value: f32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Number(value as f64)
    }
}

impl From<u32> for RawInput {
    fn from(value: u32) -> Self {
        RawInput::Number(f64::from(value))
    }
}

impl From<bool> for RawInput {
    fn from(value: bool) -> Self {
        RawInput::Bool(value)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        RawInput::Text(value.clone())
    }
}

impl From<&RawInput> for RawInput {
    fn from(value: &RawInput) -> Self {
        value.clone()
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Missing, Into::into)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        RawInput::from(&value)
    }
}

impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawInput::Missing,
            Value::Bool(b) => RawInput::Bool(*b),
            // serde_json numbers are always finite
            Value::Number(n) => n.as_f64().map_or(RawInput::Other, RawInput::Number),
            Value::String(s) => RawInput::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => RawInput::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_null_is_missing() {
        assert_eq!(RawInput::from(json!(null)), RawInput::Missing);
    }

    #[test]
    fn test_from_json_number() {
        assert_eq!(RawInput::from(json!(25)), RawInput::Number(25.0));
        assert_eq!(RawInput::from(json!(1.5)), RawInput::Number(1.5));
    }

    #[test]
    fn test_from_json_string_and_bool() {
        assert_eq!(
            RawInput::from(json!("40")),
            RawInput::Text("40".to_string())
        );
        assert_eq!(RawInput::from(json!(true)), RawInput::Bool(true));
    }

    #[test]
    fn test_from_json_containers_are_other() {
        assert_eq!(RawInput::from(json!([1, 2])), RawInput::Other);
        assert_eq!(RawInput::from(json!({"a": 1})), RawInput::Other);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawInput::from(Some(3)), RawInput::Number(3.0));
        assert_eq!(RawInput::from(None::<&str>), RawInput::Missing);
    }

    #[test]
    fn test_default_is_missing() {
        assert_eq!(RawInput::default(), RawInput::Missing);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(RawInput::from("9:00").as_text(), Some("9:00"));
        assert_eq!(RawInput::from(9).as_text(), None);
    }
}
