//! The value store behind every resource.
//!
//! A [`StripeObject`] holds two things:
//!
//! - `values`: the current field values, tagged as [`FieldValue`]s
//! - `original_values`: the JSON snapshot of the fields as last loaded from
//!   (or saved to) the server
//!
//! Local assignment only ever touches `values`. The snapshot is replaced
//! wholesale by [`StripeObject::construct_from`] and
//! [`StripeObject::refresh_from`], so the difference between the two maps is
//! exactly what the caller changed since the last load.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stripe_resources::rest::StripeObject;
//!
//! let mut person = StripeObject::construct_from(json!({
//!     "id": "person_123",
//!     "object": "person",
//!     "first_name": "Jane",
//!     "last_name": "Doe"
//! }));
//! assert!(!person.is_dirty());
//!
//! person.set("first_name", "Janet").unwrap();
//! assert_eq!(person.changed_fields(), vec!["first_name".to_string()]);
//! ```

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::rest::resources::config_for;
use crate::rest::{FieldValue, ResourceConfig, ResourceError};

/// A resource's field values plus the snapshot last loaded from the server.
///
/// Field names are not validated; unknown fields pass through opaquely.
/// Type-specific rules (protected fields, legacy arrays, the singular nested
/// object field) come from the attached [`ResourceConfig`].
///
/// # Protected fields
///
/// [`StripeObject::set`] refuses to reassign a protected field as a whole.
/// The nested object under such a field can still be modified through
/// [`StripeObject::get_object_mut`].
#[derive(Debug, Clone)]
pub struct StripeObject {
    config: &'static ResourceConfig,
    values: BTreeMap<String, FieldValue>,
    original_values: Map<String, Value>,
}

// Verify StripeObject is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeObject>();
};

impl StripeObject {
    /// Creates an empty, locally instantiated object.
    ///
    /// The original values are empty, so every field set afterwards is sent
    /// on the next save.
    #[must_use]
    pub fn new(config: &'static ResourceConfig) -> Self {
        Self {
            config,
            values: BTreeMap::new(),
            original_values: Map::new(),
        }
    }

    /// Creates an object that refers to an existing server-side resource.
    ///
    /// The id is recorded as loaded, so it is never part of an update payload.
    #[must_use]
    pub fn with_id(config: &'static ResourceConfig, id: impl Into<String>) -> Self {
        let id = id.into();
        let mut object = Self::new(config);
        object
            .original_values
            .insert("id".to_string(), Value::String(id.clone()));
        object
            .values
            .insert("id".to_string(), FieldValue::Scalar(Value::String(id)));
        object
    }

    /// Builds an object from an API response body.
    ///
    /// The configuration is looked up from the body's `"object"` key; nested
    /// JSON objects become nested `StripeObject`s the same way. Both the
    /// values and the original values are set from `body`. Non-object input
    /// yields an empty object.
    #[must_use]
    pub fn construct_from(body: Value) -> Self {
        let Value::Object(map) = body else {
            return Self::new(&ResourceConfig::DEFAULT);
        };

        let config = map
            .get("object")
            .and_then(Value::as_str)
            .map_or(&ResourceConfig::DEFAULT, config_for);

        let values = map
            .iter()
            .map(|(key, value)| (key.clone(), FieldValue::from_response(value.clone())))
            .collect();

        Self {
            config,
            values,
            original_values: map,
        }
    }

    /// Returns the serialization rules for this object.
    #[must_use]
    pub const fn config(&self) -> &'static ResourceConfig {
        self.config
    }

    /// Returns the object's id, if it has one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.values.get("id").and_then(FieldValue::as_str)
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Returns the nested object under `field` for in-place modification.
    pub fn get_object_mut(&mut self, field: &str) -> Option<&mut StripeObject> {
        self.values.get_mut(field).and_then(FieldValue::as_object_mut)
    }

    /// Returns the sequence under `field` for in-place modification.
    pub fn get_list_mut(&mut self, field: &str) -> Option<&mut Vec<FieldValue>> {
        self.values.get_mut(field).and_then(FieldValue::as_list_mut)
    }

    /// Iterates over the current fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Assigns `value` to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidOperation`] if `field` is protected.
    /// The stored value is left unchanged.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<(), ResourceError> {
        let field = field.into();
        if self.config.is_protected(&field) {
            return Err(ResourceError::InvalidOperation { field });
        }
        self.values.insert(field, value.into());
        Ok(())
    }

    /// Sets `field` to null, which is sent as an empty string to clear it
    /// server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidOperation`] if `field` is protected.
    pub fn unset(&mut self, field: impl Into<String>) -> Result<(), ResourceError> {
        self.set(field, Value::Null)
    }

    /// Assigns every entry of `attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidOperation`] if any key is protected,
    /// in which case nothing is assigned.
    pub fn update_attributes(&mut self, attributes: Map<String, Value>) -> Result<(), ResourceError> {
        if let Some(field) = attributes.keys().find(|key| self.config.is_protected(key)) {
            return Err(ResourceError::InvalidOperation {
                field: field.clone(),
            });
        }
        for (field, value) in attributes {
            self.values.insert(field, FieldValue::from(value));
        }
        Ok(())
    }

    /// Returns the snapshot last loaded from the server.
    #[must_use]
    pub const fn original_values(&self) -> &Map<String, Value> {
        &self.original_values
    }

    /// Returns the JSON form of the current values.
    #[must_use]
    pub fn snapshot(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect()
    }

    /// Returns the JSON form of the current values as a [`Value`].
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.snapshot())
    }

    /// Returns the fields whose current value differs from `original`.
    ///
    /// The comparison is shallow: a nested object counts as changed if it has
    /// pending changes of its own or its JSON differs from the original
    /// entry. Fields absent from `original` are always changed.
    #[must_use]
    pub fn diff_against(&self, original: &Map<String, Value>) -> Vec<String> {
        self.values
            .iter()
            .filter(|(key, value)| Self::differs(value, original.get(key.as_str())))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Returns the fields changed since the last load.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<String> {
        self.diff_against(&self.original_values)
    }

    /// Returns `true` if `field` changed since the last load.
    #[must_use]
    pub fn is_changed(&self, field: &str) -> bool {
        self.values
            .get(field)
            .is_some_and(|value| Self::differs(value, self.original_values.get(field)))
    }

    /// Returns `true` if any field changed since the last load.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values
            .iter()
            .any(|(key, value)| Self::differs(value, self.original_values.get(key)))
    }

    /// Replaces both the values and the original values with those of
    /// `response`, discarding local changes.
    pub fn refresh_from(&mut self, response: StripeObject) {
        self.values = response.values;
        self.original_values = response.original_values;
    }

    pub(crate) fn into_values(self) -> BTreeMap<String, FieldValue> {
        self.values
    }

    fn differs(value: &FieldValue, original: Option<&Value>) -> bool {
        let Some(original) = original else {
            return true;
        };
        match value {
            FieldValue::Object(object) => object.is_dirty() || object.to_json() != *original,
            other => other.to_json() != *original,
        }
    }
}

impl Default for StripeObject {
    fn default() -> Self {
        Self::new(&ResourceConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account() -> StripeObject {
        StripeObject::construct_from(json!({
            "id": "acct_123",
            "object": "account",
            "email": "jane@example.com",
            "legal_entity": {
                "first_name": "Jane",
                "additional_owners": [{"first_name": "Joe"}]
            },
            "metadata": {"tier": "gold"}
        }))
    }

    #[test]
    fn test_construct_from_sets_values_and_originals() {
        let object = account();
        assert_eq!(object.id(), Some("acct_123"));
        assert_eq!(object.config().object_name, "account");
        assert_eq!(object.original_values().get("email"), Some(&json!("jane@example.com")));
        assert!(!object.is_dirty());
        assert!(object.changed_fields().is_empty());
    }

    #[test]
    fn test_construct_from_non_object_is_empty() {
        let object = StripeObject::construct_from(json!([1, 2]));
        assert_eq!(object.fields().count(), 0);
        assert_eq!(object.config(), &ResourceConfig::DEFAULT);
    }

    #[test]
    fn test_unknown_object_gets_default_config() {
        let object = StripeObject::construct_from(json!({"object": "mystery"}));
        assert_eq!(object.config(), &ResourceConfig::DEFAULT);
    }

    #[test]
    fn test_set_never_touches_original_values() {
        let mut object = account();
        object.set("email", "janet@example.com").unwrap();

        assert_eq!(object.original_values().get("email"), Some(&json!("jane@example.com")));
        assert_eq!(object.get("email").and_then(FieldValue::as_str), Some("janet@example.com"));
        assert!(object.is_changed("email"));
    }

    #[test]
    fn test_set_protected_field_fails_and_keeps_value() {
        let mut object = account();
        let before = object.get("legal_entity").cloned();

        let result = object.set("legal_entity", json!({"first_name": "John"}));
        assert!(matches!(
            result,
            Err(ResourceError::InvalidOperation { ref field }) if field == "legal_entity"
        ));
        assert_eq!(object.get("legal_entity").cloned(), before);
        assert!(!object.is_dirty());
    }

    #[test]
    fn test_protected_field_allows_inner_mutation() {
        let mut object = account();
        object
            .get_object_mut("legal_entity")
            .unwrap()
            .set("first_name", "Janet")
            .unwrap();

        assert!(object.is_changed("legal_entity"));
        assert_eq!(object.changed_fields(), vec!["legal_entity".to_string()]);
    }

    #[test]
    fn test_update_attributes_is_atomic() {
        let mut object = account();
        let mut attributes = Map::new();
        attributes.insert("email".to_string(), json!("x@example.com"));
        attributes.insert("legal_entity".to_string(), json!({}));

        assert!(object.update_attributes(attributes).is_err());
        assert!(!object.is_changed("email"));

        let mut attributes = Map::new();
        attributes.insert("email".to_string(), json!("x@example.com"));
        attributes.insert("business_type".to_string(), json!("company"));
        object.update_attributes(attributes).unwrap();
        assert_eq!(
            object.changed_fields(),
            vec!["business_type".to_string(), "email".to_string()]
        );
    }

    #[test]
    fn test_equal_value_originally_absent_is_changed() {
        let mut object = StripeObject::with_id(&ResourceConfig::DEFAULT, "obj_1");
        assert!(!object.is_dirty());

        object.set("description", Value::Null).unwrap();
        assert!(object.is_changed("description"));
    }

    #[test]
    fn test_diff_against_explicit_snapshot() {
        let mut object = account();
        let snapshot = object.snapshot();
        object.set("email", "new@example.com").unwrap();

        assert_eq!(object.diff_against(&snapshot), vec!["email".to_string()]);
        assert!(object.diff_against(&object.snapshot()).is_empty());
    }

    #[test]
    fn test_refresh_from_resets_originals() {
        let mut object = account();
        object.set("email", "new@example.com").unwrap();

        let response = StripeObject::construct_from(json!({
            "id": "acct_123",
            "object": "account",
            "email": "new@example.com"
        }));
        object.refresh_from(response);

        assert!(!object.is_dirty());
        assert!(object.get("legal_entity").is_none());
        assert_eq!(object.original_values().get("email"), Some(&json!("new@example.com")));
    }

    #[test]
    fn test_unset_stores_null() {
        let mut object = account();
        object.unset("email").unwrap();
        assert!(object.get("email").unwrap().is_null());
        assert!(object.unset("legal_entity").is_err());
    }
}
