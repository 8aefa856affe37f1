//! Typed custom attributes and their tagged wire shape
//!
//! On the wire every attribute is `{"type": <tag>, "value": <payload>}`.
//! The tag table below is the single place both directions agree on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use tracing::warn;

use crate::constants::custom_attribute::*;
use crate::error::CustomAttributeError;

pub type CustomAttributes = BTreeMap<String, CustomAttributeValue>;

/// Value of one host-defined attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CustomAttributeValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    List(Vec<String>),
}

impl CustomAttributeValue {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::String(_) => TAG_STRING,
            Self::Number(_) => TAG_NUMBER,
            Self::Boolean(_) => TAG_BOOLEAN,
            Self::Date(_) => TAG_DATE,
            Self::List(_) => TAG_LIST,
        }
    }

    /// Encode into the tagged wire shape
    /// Fails only for numbers JSON cannot represent (NaN, infinities).
    pub fn to_backend(&self, key: &str) -> Result<Value, CustomAttributeError> {
        let payload = match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Number::from_f64(*n)
                .map(Value::Number)
                .ok_or_else(|| CustomAttributeError::InvalidValue { key: key.to_string(), tag: TAG_NUMBER })?,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Date(d) => Value::String(d.format(DATE_FORMAT).to_string()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        };

        let mut tagged = Map::new();
        tagged.insert(TYPE_KEY.to_string(), Value::String(self.tag().to_string()));
        tagged.insert(VALUE_KEY.to_string(), payload);
        Ok(Value::Object(tagged))
    }

    /// Decode one tagged wire value
    pub fn from_backend(key: &str, wire: &Value) -> Result<Self, CustomAttributeError> {
        let tag = wire
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| CustomAttributeError::UnknownType { key: key.to_string() })?;
        let payload = wire.get(VALUE_KEY);

        let invalid = |tag: &'static str| CustomAttributeError::InvalidValue { key: key.to_string(), tag };

        match tag {
            TAG_STRING => payload
                .and_then(Value::as_str)
                .map(|s| Self::String(s.to_string()))
                .ok_or_else(|| invalid(TAG_STRING)),
            TAG_NUMBER => payload
                .and_then(Value::as_f64)
                .map(Self::Number)
                .ok_or_else(|| invalid(TAG_NUMBER)),
            TAG_BOOLEAN => payload
                .and_then(Value::as_bool)
                .map(Self::Boolean)
                .ok_or_else(|| invalid(TAG_BOOLEAN)),
            TAG_DATE => payload
                .and_then(Value::as_str)
                .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
                .map(Self::Date)
                .ok_or_else(|| invalid(TAG_DATE)),
            TAG_LIST => payload
                .and_then(Value::as_array)
                .and_then(|items| {
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .map(Self::List)
                .ok_or_else(|| invalid(TAG_LIST)),
            _ => Err(CustomAttributeError::UnknownType { key: key.to_string() }),
        }
    }
}

impl From<&str> for CustomAttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CustomAttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for CustomAttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CustomAttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDate> for CustomAttributeValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<String>> for CustomAttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Domain → wire for a whole attribute map
pub fn to_backend(attributes: &CustomAttributes) -> Result<Map<String, Value>, CustomAttributeError> {
    attributes
        .iter()
        .map(|(key, value)| value.to_backend(key).map(|wire| (key.clone(), wire)))
        .collect()
}

/// Wire → domain for a whole attribute map
/// Attributes that fail to decode are logged and dropped; the rest are kept.
pub fn from_backend(raw: &Map<String, Value>) -> CustomAttributes {
    raw.iter()
        .filter_map(|(key, wire)| match CustomAttributeValue::from_backend(key, wire) {
            Ok(value) => Some((key.clone(), value)),
            Err(e) => {
                warn!(key = %key, error = %e, "Dropping custom attribute");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_backend_shapes() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            CustomAttributeValue::from("gold").to_backend("tier").unwrap(),
            json!({"type": "String", "value": "gold"})
        );
        assert_eq!(
            CustomAttributeValue::from(42.5).to_backend("score").unwrap(),
            json!({"type": "Number", "value": 42.5})
        );
        assert_eq!(
            CustomAttributeValue::from(true).to_backend("vip").unwrap(),
            json!({"type": "Boolean", "value": true})
        );
        assert_eq!(
            CustomAttributeValue::from(date).to_backend("since").unwrap(),
            json!({"type": "Date", "value": "2024-01-31"})
        );
        assert_eq!(
            CustomAttributeValue::from(vec!["a".to_string(), "b".to_string()]).to_backend("tags").unwrap(),
            json!({"type": "List", "value": ["a", "b"]})
        );
    }

    #[test]
    fn test_to_backend_rejects_non_finite_number() {
        let err = CustomAttributeValue::Number(f64::NAN).to_backend("score").unwrap_err();
        assert_eq!(err, CustomAttributeError::InvalidValue { key: "score".to_string(), tag: "Number" });
    }

    #[test]
    fn test_from_backend_integer_number() {
        let value = CustomAttributeValue::from_backend("age", &json!({"type": "Number", "value": 30})).unwrap();
        assert_eq!(value, CustomAttributeValue::Number(30.0));
    }

    #[test]
    fn test_from_backend_unknown_or_missing_tag() {
        for wire in [json!({"type": "Blob", "value": 1}), json!({"value": "x"}), json!("bare")] {
            assert_eq!(
                CustomAttributeValue::from_backend("k", &wire).unwrap_err(),
                CustomAttributeError::UnknownType { key: "k".to_string() }
            );
        }
    }

    #[test]
    fn test_from_backend_payload_mismatch() {
        let cases = [
            (json!({"type": "String", "value": 1}), "String"),
            (json!({"type": "Number", "value": "1"}), "Number"),
            (json!({"type": "Boolean", "value": "true"}), "Boolean"),
            (json!({"type": "Date", "value": "31/01/2024"}), "Date"),
            (json!({"type": "List", "value": ["a", 2]}), "List"),
            (json!({"type": "List"}), "List"),
        ];
        for (wire, tag) in cases {
            assert_eq!(
                CustomAttributeValue::from_backend("k", &wire).unwrap_err(),
                CustomAttributeError::InvalidValue { key: "k".to_string(), tag }
            );
        }
    }

    #[test]
    fn test_from_backend_map_drops_only_bad_attributes() {
        let raw = json!({
            "tier": {"type": "String", "value": "gold"},
            "broken": {"type": "Mystery", "value": 1},
            "vip": {"type": "Boolean", "value": false}
        });

        let attributes = from_backend(raw.as_object().unwrap());

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes["tier"], CustomAttributeValue::from("gold"));
        assert_eq!(attributes["vip"], CustomAttributeValue::Boolean(false));
        assert!(!attributes.contains_key("broken"));
    }
}
