//! Legacy index-keyed array encoding.
//!
//! A few older fields expect array updates as a map keyed by position:
//!
//! ```text
//! field[0]=item1&field[1]=item2
//! ```
//!
//! rather than the usual `field[]=item1&field[]=item2`. Positions are not
//! identities, so the encoding has two sharp edges:
//!
//! - an element moved to another index is a replacement at both indices
//! - an element cannot be removed; the only way to shorten the array is to
//!   clear it (send `""`), save, then set the new contents
//!
//! [`ArrayFieldEncoder`] refuses to encode a shrunk array instead of silently
//! sending a partial update.

use serde_json::{Map, Value};

use crate::rest::serializer::{encode_json, encode_verbatim, ParamSerializer};
use crate::rest::{FieldValue, ResourceError, SerializeOptions, UpdatePayload};

/// Encodes one legacy array as an index-keyed diff.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayFieldEncoder {
    options: SerializeOptions,
}

impl ArrayFieldEncoder {
    /// Creates an encoder.
    #[must_use]
    pub const fn new(options: SerializeOptions) -> Self {
        Self { options }
    }

    /// Encodes `current` against the array last loaded, if any.
    ///
    /// For every index `i`, the update is the element's own payload when it
    /// is a nested object with pending changes, and the element as-is
    /// otherwise. `{"i": update}` is emitted only when the update is not an
    /// empty object and differs from the original element at `i`. With no
    /// original, every non-empty element is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedDeletion`] if `current` is shorter
    /// than `original`.
    pub fn encode(
        &self,
        field: &str,
        original: Option<&[Value]>,
        current: &[FieldValue],
    ) -> Result<UpdatePayload, ResourceError> {
        if let Some(original) = original {
            if original.len() > current.len() {
                return Err(ResourceError::UnsupportedDeletion {
                    field: field.to_string(),
                    original_len: original.len(),
                    current_len: current.len(),
                });
            }
        }

        let mut update = Map::new();
        for (index, element) in current.iter().enumerate() {
            let element_update = match element {
                FieldValue::Object(object) if object.is_dirty() => {
                    Value::Object(ParamSerializer::new(self.options).nested().serialize(object)?)
                }
                other => encode_verbatim(other),
            };

            if element_update.as_object().is_some_and(Map::is_empty) {
                tracing::trace!("{}[{}] has no update", field, index);
                continue;
            }

            let original_element = original
                .and_then(|items| items.get(index))
                .map(|item| encode_json(item.clone()));
            if original_element.as_ref() == Some(&element_update) {
                tracing::trace!("{}[{}] is unchanged", field, index);
                continue;
            }

            tracing::trace!("{}[{}] will be sent", field, index);
            update.insert(index.to_string(), element_update);
        }

        Ok(update)
    }
}
