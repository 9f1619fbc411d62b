//! Diff-based update payload construction.
//!
//! [`serialize`] compares a [`StripeObject`]'s current values with the
//! snapshot it was loaded from and returns only what changed, encoded the way
//! the API expects:
//!
//! - changed fields are included, fields absent from the snapshot always are
//! - null is sent as `""`, which clears the field server-side
//! - additive object fields (such as `metadata`) send `""` for removed keys
//! - protected fields are never sent
//! - the resource's singular nested object field is sent as its own diff
//! - legacy array paths go through the [`ArrayFieldEncoder`]
//!
//! Serialization is pure: it never mutates the object and never performs I/O.
//! All errors are raised here, before any request is built.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stripe_resources::rest::{serialize, SerializeOptions, StripeObject};
//!
//! let mut account = StripeObject::construct_from(json!({
//!     "id": "acct_123",
//!     "object": "account",
//!     "email": "jane@example.com",
//!     "business_type": "individual"
//! }));
//! account.set("email", "janet@example.com").unwrap();
//!
//! let payload = serialize(&account, SerializeOptions::default()).unwrap();
//! assert_eq!(json!(payload), json!({"email": "janet@example.com"}));
//! ```

use serde_json::{Map, Value};

use crate::rest::legacy_array::ArrayFieldEncoder;
use crate::rest::{FieldValue, ResourceConfig, ResourceError, StripeObject};

/// An update payload: field name to scalar, nested payload, or index-keyed
/// array diff.
pub type UpdatePayload = Map<String, Value>;

/// Options controlling payload construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Serialize every field regardless of the diff. Protected fields are
    /// still excluded.
    pub force: bool,
}

impl SerializeOptions {
    /// Creates the default options (diff only).
    #[must_use]
    pub const fn new() -> Self {
        Self { force: false }
    }

    /// Sets whether every field is serialized.
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Builds the update payload for `object`.
///
/// # Errors
///
/// Returns [`ResourceError::UnsupportedDeletion`] if a legacy array is
/// shorter than its loaded original.
pub fn serialize(
    object: &StripeObject,
    options: SerializeOptions,
) -> Result<UpdatePayload, ResourceError> {
    ParamSerializer::new(options).serialize(object)
}

/// Recursive payload builder.
///
/// The singular nested object rule applies at the top level only; nested
/// objects serialized on behalf of a parent never recurse into their own
/// nested object field.
#[derive(Debug, Clone, Copy)]
pub struct ParamSerializer {
    options: SerializeOptions,
    depth: usize,
}

impl ParamSerializer {
    /// Creates a top-level serializer.
    #[must_use]
    pub const fn new(options: SerializeOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Returns a serializer for objects nested one level below this one.
    #[must_use]
    pub(crate) const fn nested(self) -> Self {
        Self {
            options: self.options,
            depth: self.depth + 1,
        }
    }

    /// Builds the update payload for `object`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedDeletion`] if a legacy array is
    /// shorter than its loaded original.
    pub fn serialize(&self, object: &StripeObject) -> Result<UpdatePayload, ResourceError> {
        let config = object.config();
        let original = object.original_values();
        let mut payload = UpdatePayload::new();

        for (field, value) in object.fields() {
            if config.is_protected(field) || config.is_legacy_array(field) {
                continue;
            }
            let original_value = original.get(field);

            // Only an object loaded in place diffs against itself; a replacement
            // is sent whole below.
            if self.depth == 0 && config.is_nested_object_field(field) {
                if let (FieldValue::Object(nested), Some(Value::Object(loaded))) =
                    (value, original_value)
                {
                    if nested.original_values() != loaded {
                        payload.insert(field.to_string(), encode_verbatim(value));
                        continue;
                    }
                    let update = self.nested().serialize(nested)?;
                    if !update.is_empty() {
                        payload.insert(field.to_string(), Value::Object(update));
                    }
                    continue;
                }
            }

            if self.options.force || object.is_changed(field) {
                payload.insert(
                    field.to_string(),
                    encode_field(config, field, value, original_value),
                );
            }
        }

        self.encode_legacy_arrays(object, &mut payload)?;

        if self.depth == 0 {
            tracing::debug!(
                "Serialized {} update with {} top-level fields",
                if config.object_name.is_empty() { "object" } else { config.object_name },
                payload.len()
            );
        }

        Ok(payload)
    }

    fn encode_legacy_arrays(
        &self,
        object: &StripeObject,
        payload: &mut UpdatePayload,
    ) -> Result<(), ResourceError> {
        for path in object.config().legacy_array_fields {
            let Some((last, parents)) = path.split_last() else {
                continue;
            };
            let Some(parent) = parents
                .iter()
                .try_fold(object, |parent, segment| parent.get(segment)?.as_object())
            else {
                continue;
            };
            let Some(current) = parent.get(last) else {
                continue;
            };

            let update = match current {
                FieldValue::List(items) => {
                    let original = if self.options.force {
                        None
                    } else {
                        parent
                            .original_values()
                            .get(*last)
                            .and_then(Value::as_array)
                            .map(Vec::as_slice)
                    };
                    let encoded = ArrayFieldEncoder::new(self.options).encode(
                        &path.join("."),
                        original,
                        items,
                    )?;
                    if encoded.is_empty() {
                        continue;
                    }
                    Value::Object(encoded)
                }
                other if self.options.force || parent.is_changed(last) => encode_verbatim(other),
                _ => continue,
            };

            insert_at(payload, path, update);
        }
        Ok(())
    }
}

/// Encodes a value as sent for a changed field, without diffing.
pub(crate) fn encode_verbatim(value: &FieldValue) -> Value {
    encode_json(value.to_json())
}

/// Maps a top-level null to the empty string.
pub(crate) fn encode_json(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        other => other,
    }
}

fn encode_field(
    config: &ResourceConfig,
    field: &str,
    value: &FieldValue,
    original: Option<&Value>,
) -> Value {
    let encoded = encode_verbatim(value);
    match (encoded, original) {
        (Value::Object(mut current), Some(Value::Object(original))) if config.is_additive(field) => {
            for key in original.keys() {
                if !current.contains_key(key) {
                    current.insert(key.clone(), Value::String(String::new()));
                }
            }
            Value::Object(current)
        }
        (encoded, _) => encoded,
    }
}

fn insert_at(payload: &mut UpdatePayload, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut target = payload;
    for segment in parents {
        let entry = target
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(next) = entry else {
            return;
        };
        target = next;
    }
    target.insert((*last).to_string(), value);
}
