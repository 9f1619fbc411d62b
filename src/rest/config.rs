//! Per-resource-type serialization rules.
//!
//! A [`ResourceConfig`] is a plain `const` value declared once per resource
//! type and attached to every [`StripeObject`](crate::rest::StripeObject) of
//! that type. The value store consults it when fields are assigned, and the
//! [`ParamSerializer`](crate::rest::ParamSerializer) consults it when a
//! payload is built.
//!
//! # Example
//!
//! ```rust
//! use stripe_resources::rest::ResourceConfig;
//!
//! const WIDGET: ResourceConfig = ResourceConfig::new("widget")
//!     .with_protected_fields(&["owner"])
//!     .with_legacy_array_fields(&[&["owner", "delegates"]]);
//!
//! assert!(WIDGET.is_protected("owner"));
//! assert!(WIDGET.is_additive("metadata"));
//! ```

/// Serialization rules for one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceConfig {
    /// The `object` value identifying this type in API responses.
    pub object_name: &'static str,
    /// Fields that may never be reassigned wholesale and are never sent.
    pub protected_fields: &'static [&'static str],
    /// Paths (from the resource root) of sequences sent in the legacy
    /// index-keyed form.
    pub legacy_array_fields: &'static [&'static [&'static str]],
    /// The one field whose nested resource is serialized as its own diff.
    pub nested_object_field: Option<&'static str>,
    /// Object fields whose removed keys are sent as empty strings.
    pub additive_fields: &'static [&'static str],
}

impl ResourceConfig {
    /// Rules for objects with no type-specific behavior.
    pub const DEFAULT: Self = Self {
        object_name: "",
        protected_fields: &[],
        legacy_array_fields: &[],
        nested_object_field: None,
        additive_fields: &["metadata"],
    };

    /// Creates default rules for the given object name.
    #[must_use]
    pub const fn new(object_name: &'static str) -> Self {
        Self {
            object_name,
            ..Self::DEFAULT
        }
    }

    /// Sets the protected fields.
    #[must_use]
    pub const fn with_protected_fields(self, fields: &'static [&'static str]) -> Self {
        Self {
            protected_fields: fields,
            ..self
        }
    }

    /// Sets the legacy array paths.
    #[must_use]
    pub const fn with_legacy_array_fields(self, paths: &'static [&'static [&'static str]]) -> Self {
        Self {
            legacy_array_fields: paths,
            ..self
        }
    }

    /// Sets the singular nested object field.
    #[must_use]
    pub const fn with_nested_object_field(self, field: &'static str) -> Self {
        Self {
            nested_object_field: Some(field),
            ..self
        }
    }

    /// Sets the additive object fields.
    #[must_use]
    pub const fn with_additive_fields(self, fields: &'static [&'static str]) -> Self {
        Self {
            additive_fields: fields,
            ..self
        }
    }

    /// Returns `true` if `field` is protected.
    #[must_use]
    pub fn is_protected(&self, field: &str) -> bool {
        self.protected_fields.contains(&field)
    }

    /// Returns `true` if `field` is additive.
    #[must_use]
    pub fn is_additive(&self, field: &str) -> bool {
        self.additive_fields.contains(&field)
    }

    /// Returns `true` if the top-level `field` is itself a legacy array.
    #[must_use]
    pub fn is_legacy_array(&self, field: &str) -> bool {
        self.legacy_array_fields
            .iter()
            .any(|path| path.len() == 1 && path[0] == field)
    }

    /// Returns `true` if `field` is the singular nested object field.
    #[must_use]
    pub fn is_nested_object_field(&self, field: &str) -> bool {
        self.nested_object_field == Some(field)
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
