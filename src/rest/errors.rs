//! Error types for resource operations.
//!
//! Errors fall in two groups:
//!
//! - **Diff-time errors** ([`ResourceError::InvalidOperation`],
//!   [`ResourceError::UnsupportedDeletion`]) are raised while a mutation is
//!   applied or a payload is built, always before any request is sent.
//! - **Executor errors** ([`ResourceError::Api`]) are passed through from the
//!   [`RequestExecutor`](crate::clients::RequestExecutor) unchanged.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stripe_resources::rest::{ResourceError, StripeObject};
//!
//! let mut account = StripeObject::construct_from(json!({
//!     "id": "acct_123",
//!     "object": "account",
//!     "legal_entity": {"first_name": "Jane"}
//! }));
//!
//! let err = account.set("legal_entity", json!({"first_name": "John"})).unwrap_err();
//! assert!(matches!(err, ResourceError::InvalidOperation { .. }));
//! ```

use crate::clients::ApiError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A protected structured field was reassigned as a whole.
    ///
    /// Overwriting such a field wholesale would partially clobber server-side
    /// state; set its individual sub-fields instead.
    #[error("Overriding {field} can cause serious issues. Instead, set the individual fields of {field} like `{field}.first_name`.")]
    InvalidOperation {
        /// The protected field.
        field: String,
    },

    /// A legacy-encoded array is shorter than the array last loaded.
    ///
    /// The wire format has no way to delete an element by index. Unset the
    /// field and save, then assign the new array.
    #[error("You cannot delete an item from an array, you must instead set a new array: {field} shrank from {original_len} to {current_len} items. Unset {field}, save, then assign the new array.")]
    UnsupportedDeletion {
        /// Dotted path of the field (e.g. `legal_entity.additional_owners`).
        field: String,
        /// Length of the array as last loaded.
        original_len: usize,
        /// Length of the local array.
        current_len: usize,
    },

    /// An operation needed the resource's id but it has none.
    #[error("Cannot {operation} a {resource} without an id")]
    MissingId {
        /// The object name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A nested relation was asked for an operation it does not declare.
    #[error("{resource} does not support {operation}")]
    UnsupportedOperation {
        /// The relation name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The request executor failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiResponseError;
    use serde_json::json;

    #[test]
    fn test_invalid_operation_names_the_field() {
        let error = ResourceError::InvalidOperation {
            field: "legal_entity".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Overriding legal_entity"));
        assert!(message.contains("individual fields of legal_entity"));
    }

    #[test]
    fn test_unsupported_deletion_explains_clear_then_set() {
        let error = ResourceError::UnsupportedDeletion {
            field: "legal_entity.additional_owners".to_string(),
            original_len: 3,
            current_len: 2,
        };
        let message = error.to_string();
        assert!(message.contains("cannot delete an item from an array"));
        assert!(message.contains("from 3 to 2"));
        assert!(message.contains("Unset legal_entity.additional_owners"));
    }

    #[test]
    fn test_missing_id_message() {
        let error = ResourceError::MissingId {
            resource: "issuing.dispute",
            operation: "submit",
        };
        assert_eq!(error.to_string(), "Cannot submit a issuing.dispute without an id");
    }

    #[test]
    fn test_unsupported_operation_message() {
        let error = ResourceError::UnsupportedOperation {
            resource: "login_link",
            operation: "delete",
        };
        assert_eq!(error.to_string(), "login_link does not support delete");
    }

    #[test]
    fn test_api_error_is_transparent() {
        let api_error: ApiError =
            ApiResponseError::from_body(404, &json!({"error": {"message": "No such account"}}), None)
                .into();
        let error: ResourceError = api_error.into();
        assert!(matches!(error, ResourceError::Api(_)));
        assert_eq!(error.to_string(), "No such account");
    }
}
