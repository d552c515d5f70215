//! Normalized input row for the eligibility rules.
//!
//! Keys are trimmed and lowercased. Text values are trimmed and lowercased
//! on read; `null` counts as absent so the rule's default applies.

use std::collections::HashMap;

use serde_json::Value;

use super::RuleError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Build a row from a JSON object
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        let Value::Object(map) = value else {
            return Err(RuleError::NotAnObject);
        };

        let fields = map
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();

        Ok(Self { fields })
    }

    /// Rows from either one JSON object or an array of objects
    pub fn many_from_value(value: Value) -> Result<Vec<Self>, RuleError> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            other => Ok(vec![Self::from_value(other)?]),
        }
    }

    /// Lowercased text, or `default` when the field is absent
    pub fn text(&self, key: &str, default: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.trim().to_lowercase(),
            Some(other) => other.to_string().to_lowercase(),
            None => default.to_string(),
        }
    }

    /// True when the text value is one of `options`
    pub fn is_one_of(&self, key: &str, default: &str, options: &[&str]) -> bool {
        let value = self.text(key, default);
        options.contains(&value.as_str())
    }

    /// Numeric value, or `default` when the field is absent
    pub fn number(&self, key: &'static str, default: f64) -> Result<f64, RuleError> {
        match self.fields.get(key) {
            None => Ok(default),
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| invalid(key, n.to_string())),
            Some(Value::String(s)) => s.trim().parse().map_err(|_| invalid(key, s.clone())),
            Some(other) => Err(invalid(key, other.to_string())),
        }
    }
}

fn invalid(field: &'static str, value: String) -> RuleError {
    RuleError::InvalidNumber { field, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        Row::from_value(value).unwrap()
    }

    #[test]
    fn test_keys_and_values_normalized() {
        let row = row(json!({" House_Type ": "  Kutcha "}));
        assert_eq!(row.text("house_type", ""), "kutcha");
    }

    #[test]
    fn test_missing_and_null_use_default() {
        let row = row(json!({"is_st": null}));
        assert_eq!(row.text("is_st", "no"), "no");
        assert_eq!(row.number("annual_income", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_string_text() {
        let row = row(json!({"is_st": 1, "flag": true}));
        assert_eq!(row.text("is_st", "no"), "1");
        assert_eq!(row.text("flag", "no"), "true");
    }

    #[test]
    fn test_number_from_string_and_number() {
        let row = row(json!({"a": "12.5", "b": 40}));
        assert_eq!(row.number("a", 0.0).unwrap(), 12.5);
        assert_eq!(row.number("b", 0.0).unwrap(), 40.0);
    }

    #[test]
    fn test_number_invalid() {
        let row = row(json!({"annual_income": "lots"}));
        let err = row.number("annual_income", 0.0).unwrap_err();
        assert_eq!(
            err,
            RuleError::InvalidNumber {
                field: "annual_income",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(Row::from_value(json!("x")).unwrap_err(), RuleError::NotAnObject);
    }

    #[test]
    fn test_many_from_value() {
        let rows = Row::many_from_value(json!([{"a": 1}, {"a": 2}])).unwrap();
        assert_eq!(rows.len(), 2);
        let rows = Row::many_from_value(json!({"a": 1})).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(Row::many_from_value(json!([{"a": 1}, 3])).is_err());
    }
}
