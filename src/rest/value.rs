//! Tagged field values.
//!
//! Every value held by a [`StripeObject`] is a [`FieldValue`]. Its variant is
//! decided once, when the value enters the store, so the serializer never has
//! to guess at runtime:
//!
//! - JSON objects that come back from the API become [`FieldValue::Object`]
//!   (nested resources with their own change tracking).
//! - JSON arrays become [`FieldValue::List`].
//! - Everything else is a [`FieldValue::Scalar`].
//!
//! Locally assigned JSON objects stay [`FieldValue::Scalar`]: they have no
//! server-side original to diff against and are always sent verbatim.

use serde_json::Value;

use crate::rest::StripeObject;

/// A value stored under a field of a [`StripeObject`].
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A JSON value sent as-is (strings, numbers, booleans, null, and
    /// locally built JSON objects).
    Scalar(Value),
    /// A nested resource with its own values and original values.
    Object(StripeObject),
    /// An ordered sequence.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Converts an API response value, turning every JSON object into a
    /// [`StripeObject`] that remembers its loaded state.
    #[must_use]
    pub fn from_response(value: Value) -> Self {
        match value {
            Value::Object(_) => Self::Object(StripeObject::construct_from(value)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_response).collect()),
            other => Self::Scalar(other),
        }
    }

    /// Returns the JSON form of this value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::Object(object) => object.to_json(),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
        }
    }

    /// Returns `true` for a null scalar.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Value::Null))
    }

    /// Returns the scalar string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => value.as_str(),
            _ => None,
        }
    }

    /// Returns the nested resource, if this is one.
    #[must_use]
    pub const fn as_object(&self) -> Option<&StripeObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the nested resource mutably, if this is one.
    pub fn as_object_mut(&mut self) -> Option<&mut StripeObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the sequence, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the sequence mutably, if this is one.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<FieldValue>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Deep structural equality on the JSON form.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_json() == other.to_json()
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            other => Self::Scalar(other),
        }
    }
}

impl From<StripeObject> for FieldValue {
    fn from(object: StripeObject) -> Self {
        Self::Object(object)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        Self::List(items)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Value::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_wraps_objects_and_arrays() {
        let value = FieldValue::from_response(json!({
            "owners": [{"first_name": "Jane"}, "plain"],
            "count": 2
        }));

        let object = value.as_object().unwrap();
        let owners = object.get("owners").and_then(FieldValue::as_list).unwrap();
        assert!(matches!(owners[0], FieldValue::Object(_)));
        assert_eq!(owners[1].as_str(), Some("plain"));
        assert_eq!(object.get("count"), Some(&FieldValue::from(2)));
    }

    #[test]
    fn test_local_json_objects_stay_scalar() {
        let value = FieldValue::from(json!({"first_name": "Jane"}));
        assert!(matches!(value, FieldValue::Scalar(_)));

        let value = FieldValue::from(json!([{"first_name": "Jane"}]));
        let items = value.as_list().unwrap();
        assert!(matches!(items[0], FieldValue::Scalar(_)));
    }

    #[test]
    fn test_equality_is_structural_across_variants() {
        let loaded = FieldValue::from_response(json!({"a": [1, 2]}));
        let local = FieldValue::from(json!({"a": [1, 2]}));
        assert_eq!(loaded, local);
        assert_ne!(loaded, FieldValue::from(json!({"a": [2, 1]})));
    }

    #[test]
    fn test_to_json_round_trips_nested_shapes() {
        let json = json!({"a": {"b": [true, null, {"c": "d"}]}});
        assert_eq!(FieldValue::from_response(json.clone()).to_json(), json);
    }

    #[test]
    fn test_is_null() {
        assert!(FieldValue::Scalar(Value::Null).is_null());
        assert!(!FieldValue::from("").is_null());
    }
}
