use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scalar payload: text, number, flag or timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl Scalar {
    /// Short label used in coercion diagnostics
    pub fn type_label(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::String(_) => "string",
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Bool(_) => "bool",
            Scalar::Date(_) => "date",
        }
    }
}

/// The value slot of a mutation
///
/// Closed over the shapes a property can receive. Consumers match on it
/// exhaustively; the target property's kind decides the interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Variant {
    Scalar(Scalar),
    /// Identity token (uid) of a referenced object
    Identity(String),
    /// Structured content of an embedded value object
    Embedded(Value),
    List(Vec<Variant>),
}

impl Variant {
    pub fn null() -> Self {
        Variant::Scalar(Scalar::Null)
    }

    pub fn identity(uid: impl Into<String>) -> Self {
        Variant::Identity(uid.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Variant::Scalar(Scalar::Null))
    }

    /// Identity token carried by this value, if it can be read as one
    ///
    /// Accepts an explicit identity, a bare string, or a reference object
    /// of the form `{"id": "<uid>"}`.
    pub fn identity_token(&self) -> Option<&str> {
        match self {
            Variant::Identity(uid) => Some(uid),
            Variant::Scalar(Scalar::String(uid)) => Some(uid),
            Variant::Embedded(Value::Object(map)) => map.get("id").and_then(Value::as_str),
            _ => None,
        }
    }

    /// The elements a collection mutation acts on
    ///
    /// A list contributes each of its items; any other value is a single
    /// element.
    pub fn elements(&self) -> Vec<&Variant> {
        match self {
            Variant::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            Variant::Scalar(scalar) => scalar.type_label(),
            Variant::Identity(_) => "identity",
            Variant::Embedded(_) => "embedded",
            Variant::List(_) => "list",
        }
    }

    /// Plain JSON rendering, as an external codec would see the value
    pub fn to_json(&self) -> Value {
        match self {
            Variant::Scalar(Scalar::Null) => Value::Null,
            Variant::Scalar(Scalar::String(s)) => Value::String(s.clone()),
            Variant::Scalar(Scalar::Integer(i)) => Value::from(*i),
            Variant::Scalar(Scalar::Float(f)) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Variant::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            Variant::Scalar(Scalar::Date(d)) => {
                Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Variant::Identity(uid) => serde_json::json!({ "id": uid }),
            Variant::Embedded(value) => value.clone(),
            Variant::List(items) => Value::Array(items.iter().map(Variant::to_json).collect()),
        }
    }

    /// Untyped reading of plain JSON
    ///
    /// Strings stay strings (identity lenses accept them as tokens),
    /// objects become embedded content.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Variant::null(),
            Value::Bool(b) => Variant::from(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Variant::from(i),
                None => Variant::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => Variant::from(s.as_str()),
            Value::Array(items) => Variant::List(items.iter().map(Variant::from_json).collect()),
            Value::Object(_) => Variant::Embedded(value.clone()),
        }
    }
}

impl From<Scalar> for Variant {
    fn from(scalar: Scalar) -> Self {
        Variant::Scalar(scalar)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Variant {
    fn from(i: i64) -> Self {
        Variant::Scalar(Scalar::Integer(i))
    }
}

impl From<i32> for Variant {
    fn from(i: i32) -> Self {
        Variant::Scalar(Scalar::Integer(i64::from(i)))
    }
}

impl From<u32> for Variant {
    fn from(i: u32) -> Self {
        Variant::Scalar(Scalar::Integer(i64::from(i)))
    }
}

impl From<f64> for Variant {
    fn from(f: f64) -> Self {
        Variant::Scalar(Scalar::Float(f))
    }
}

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Variant::Scalar(Scalar::Bool(b))
    }
}

impl From<DateTime<Utc>> for Variant {
    fn from(d: DateTime<Utc>) -> Self {
        Variant::Scalar(Scalar::Date(d))
    }
}

impl<V: Into<Variant>> FromIterator<V> for Variant {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Variant::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_token_shapes() {
        assert_eq!(Variant::identity("abc").identity_token(), Some("abc"));
        assert_eq!(Variant::from("abc").identity_token(), Some("abc"));
        assert_eq!(
            Variant::Embedded(json!({"id": "abc", "name": "x"})).identity_token(),
            Some("abc")
        );
        assert_eq!(Variant::from(3).identity_token(), None);
    }

    #[test]
    fn test_elements_flattens_one_level() {
        let list: Variant = vec!["a", "b"].into_iter().collect();
        assert_eq!(list.elements().len(), 2);
        assert_eq!(Variant::from(1).elements(), vec![&Variant::from(1)]);
    }

    #[test]
    fn test_json_reading_keeps_numbers_typed() {
        assert_eq!(Variant::from_json(&json!(3)), Variant::from(3i64));
        assert_eq!(
            Variant::from_json(&json!(2.5)),
            Variant::Scalar(Scalar::Float(2.5))
        );
        assert!(Variant::from_json(&json!(null)).is_null());
        assert_eq!(
            Variant::from_json(&json!(["x", 1])),
            Variant::List(vec![Variant::from("x"), Variant::from(1i64)])
        );
    }

    #[test]
    fn test_identity_renders_as_reference_object() {
        assert_eq!(Variant::identity("u1").to_json(), json!({"id": "u1"}));
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let encoded = serde_json::to_value(Variant::from("x")).unwrap();
        assert_eq!(
            encoded,
            json!({"kind": "scalar", "value": {"type": "string", "value": "x"}})
        );
        let decoded: Variant = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, Variant::from("x"));
    }
}
