//! Sub-resource operations scoped under a parent id.
//!
//! A nested relation (an account's persons, capabilities, external accounts)
//! is declared once as data: a [`NestedResourceSpec`] naming the relation,
//! its plural path segment and the operations it supports. Every operation
//! then goes through one table, [`NestedOperation::shape`], and one generic
//! dispatch function, [`request`]:
//!
//! | Operation  | Method   | Path                                         |
//! |------------|----------|----------------------------------------------|
//! | `create`   | `POST`   | `{parent}/{parent_id}/{plural}`              |
//! | `retrieve` | `GET`    | `{parent}/{parent_id}/{plural}/{nested_id}`  |
//! | `update`   | `PATCH`  | `{parent}/{parent_id}/{plural}/{nested_id}`  |
//! | `delete`   | `DELETE` | `{parent}/{parent_id}/{plural}/{nested_id}`  |
//! | `list`     | `GET`    | `{parent}/{parent_id}/{plural}`              |
//!
//! The [`nested_resource!`](crate::nested_resource) macro declares a relation
//! type and implements one marker trait per declared operation
//! ([`NestedCreate`], [`NestedRetrieve`], [`NestedUpdate`], [`NestedDelete`],
//! [`NestedList`]). An operation that was not declared has no method to
//! call.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_resources::rest::{NestedCreate, NestedList};
//! use stripe_resources::rest::resources::AccountPersons;
//!
//! let person = AccountPersons::create(&client, "acct_123", params, &options).await?;
//! let page = AccountPersons::list(&client, "acct_123", Params::new(), &options).await?;
//! ```

use crate::clients::{ApiRequest, HttpMethod, Params, RequestExecutor, RequestOptions};
use crate::rest::path::member_path;
use crate::rest::resource::execute;
use crate::rest::{ApiResource, ListObject, ResourceError, StripeObject};

/// An operation a nested relation can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedOperation {
    /// Create a sub-resource.
    Create,
    /// Fetch one sub-resource.
    Retrieve,
    /// Update one sub-resource.
    Update,
    /// Delete one sub-resource.
    Delete,
    /// List sub-resources.
    List,
}

/// The request shape of a [`NestedOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestShape {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Whether the path ends with the nested id.
    pub targets_member: bool,
}

impl NestedOperation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Retrieve,
        Self::Update,
        Self::Delete,
        Self::List,
    ];

    /// Returns the request shape of this operation.
    #[must_use]
    pub const fn shape(self) -> RequestShape {
        let (http_method, targets_member) = match self {
            Self::Create => (HttpMethod::Post, false),
            Self::Retrieve => (HttpMethod::Get, true),
            Self::Update => (HttpMethod::Patch, true),
            Self::Delete => (HttpMethod::Delete, true),
            Self::List => (HttpMethod::Get, false),
        };
        RequestShape {
            http_method,
            targets_member,
        }
    }

    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }
}

/// The declaration of one nested relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedResourceSpec {
    /// The singular relation name, e.g. `capability`.
    pub relation: &'static str,
    /// The plural path segment, e.g. `capabilities`.
    pub plural: &'static str,
    /// The supported operations.
    pub operations: &'static [NestedOperation],
}

impl NestedResourceSpec {
    /// Creates a relation declaration.
    #[must_use]
    pub const fn new(
        relation: &'static str,
        plural: &'static str,
        operations: &'static [NestedOperation],
    ) -> Self {
        Self {
            relation,
            plural,
            operations,
        }
    }

    /// Returns `true` if `operation` was declared.
    #[must_use]
    pub fn supports(&self, operation: NestedOperation) -> bool {
        self.operations.contains(&operation)
    }

    /// Returns `{parent_collection}/{parent_id}/{plural}`.
    #[must_use]
    pub fn collection_path(&self, parent_collection: &str, parent_id: &str) -> String {
        format!("{}/{}", member_path(parent_collection, parent_id), self.plural)
    }

    /// Returns `{parent_collection}/{parent_id}/{plural}/{nested_id}`.
    #[must_use]
    pub fn member_path(&self, parent_collection: &str, parent_id: &str, nested_id: &str) -> String {
        member_path(&self.collection_path(parent_collection, parent_id), nested_id)
    }
}

/// Builds the request for `operation` on a nested relation.
///
/// # Errors
///
/// Returns [`ResourceError::UnsupportedOperation`] if `spec` does not declare
/// `operation`, or [`ResourceError::MissingId`] if the operation targets one
/// sub-resource and `nested_id` is `None`.
pub fn request(
    spec: &NestedResourceSpec,
    parent_collection: &str,
    operation: NestedOperation,
    parent_id: &str,
    nested_id: Option<&str>,
    params: Params,
    options: &RequestOptions,
) -> Result<ApiRequest, ResourceError> {
    if !spec.supports(operation) {
        return Err(ResourceError::UnsupportedOperation {
            resource: spec.relation,
            operation: operation.as_str(),
        });
    }

    let shape = operation.shape();
    let path = if shape.targets_member {
        let nested_id = nested_id.ok_or(ResourceError::MissingId {
            resource: spec.relation,
            operation: operation.as_str(),
        })?;
        spec.member_path(parent_collection, parent_id, nested_id)
    } else {
        spec.collection_path(parent_collection, parent_id)
    };

    Ok(ApiRequest::new(shape.http_method, path, params, options.clone()))
}

/// Builds and executes the request for `operation` on relation `R`.
async fn dispatch<R: NestedRelation + ?Sized, E: RequestExecutor>(
    executor: &E,
    operation: NestedOperation,
    parent_id: &str,
    nested_id: Option<&str>,
    params: Params,
    options: &RequestOptions,
) -> Result<StripeObject, ResourceError> {
    let request = request(
        &R::SPEC,
        <R::Parent as ApiResource>::COLLECTION,
        operation,
        parent_id,
        nested_id,
        params,
        options,
    )?;
    tracing::debug!(
        "Nested {} {} for {}",
        R::SPEC.relation,
        operation.as_str(),
        parent_id
    );
    execute(executor, request).await
}

/// A nested relation of a parent resource type.
pub trait NestedRelation {
    /// The parent resource type, whose collection prefixes every path.
    type Parent: ApiResource;

    /// The relation declaration.
    const SPEC: NestedResourceSpec;
}

/// `POST {parent}/{parent_id}/{plural}`.
#[allow(async_fn_in_trait)]
pub trait NestedCreate: NestedRelation {
    /// Creates a sub-resource under `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn create<E: RequestExecutor>(
        executor: &E,
        parent_id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        dispatch::<Self, E>(executor, NestedOperation::Create, parent_id, None, params, options)
            .await
    }
}

/// `GET {parent}/{parent_id}/{plural}/{nested_id}`.
#[allow(async_fn_in_trait)]
pub trait NestedRetrieve: NestedRelation {
    /// Fetches one sub-resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn retrieve<E: RequestExecutor>(
        executor: &E,
        parent_id: &str,
        nested_id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        dispatch::<Self, E>(
            executor,
            NestedOperation::Retrieve,
            parent_id,
            Some(nested_id),
            params,
            options,
        )
        .await
    }
}

/// `PATCH {parent}/{parent_id}/{plural}/{nested_id}`.
#[allow(async_fn_in_trait)]
pub trait NestedUpdate: NestedRelation {
    /// Updates one sub-resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn update<E: RequestExecutor>(
        executor: &E,
        parent_id: &str,
        nested_id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        dispatch::<Self, E>(
            executor,
            NestedOperation::Update,
            parent_id,
            Some(nested_id),
            params,
            options,
        )
        .await
    }
}

/// `DELETE {parent}/{parent_id}/{plural}/{nested_id}`.
#[allow(async_fn_in_trait)]
pub trait NestedDelete: NestedRelation {
    /// Deletes one sub-resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn delete<E: RequestExecutor>(
        executor: &E,
        parent_id: &str,
        nested_id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        dispatch::<Self, E>(
            executor,
            NestedOperation::Delete,
            parent_id,
            Some(nested_id),
            params,
            options,
        )
        .await
    }
}

/// `GET {parent}/{parent_id}/{plural}`.
#[allow(async_fn_in_trait)]
pub trait NestedList: NestedRelation {
    /// Lists one page of sub-resources under `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn list<E: RequestExecutor>(
        executor: &E,
        parent_id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<ListObject, ResourceError> {
        dispatch::<Self, E>(executor, NestedOperation::List, parent_id, None, params, options)
            .await
            .map(ListObject::from_object)
    }
}

/// Declares a nested relation type for a parent resource.
///
/// Generates a unit struct implementing [`NestedRelation`] and one marker
/// trait per listed operation (`create`, `retrieve`, `update`, `delete`,
/// `list`).
///
/// # Example
///
/// ```rust
/// use stripe_resources::nested_resource;
/// use stripe_resources::rest::{NestedOperation, NestedRelation};
/// use stripe_resources::rest::resources::Account;
///
/// nested_resource! {
///     /// An account's login links.
///     pub struct LoginLinks for Account {
///         relation: "login_link",
///         plural: "login_links",
///         operations: [create],
///     }
/// }
///
/// assert!(LoginLinks::SPEC.supports(NestedOperation::Create));
/// assert!(!LoginLinks::SPEC.supports(NestedOperation::Delete));
/// ```
#[macro_export]
macro_rules! nested_resource {
    (@operation create) => { $crate::rest::NestedOperation::Create };
    (@operation retrieve) => { $crate::rest::NestedOperation::Retrieve };
    (@operation update) => { $crate::rest::NestedOperation::Update };
    (@operation delete) => { $crate::rest::NestedOperation::Delete };
    (@operation list) => { $crate::rest::NestedOperation::List };

    (@marker $name:ident, create) => { impl $crate::rest::NestedCreate for $name {} };
    (@marker $name:ident, retrieve) => { impl $crate::rest::NestedRetrieve for $name {} };
    (@marker $name:ident, update) => { impl $crate::rest::NestedUpdate for $name {} };
    (@marker $name:ident, delete) => { impl $crate::rest::NestedDelete for $name {} };
    (@marker $name:ident, list) => { impl $crate::rest::NestedList for $name {} };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $parent:ty {
            relation: $relation:literal,
            plural: $plural:literal,
            operations: [$($operation:ident),+ $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::rest::NestedRelation for $name {
            type Parent = $parent;

            const SPEC: $crate::rest::NestedResourceSpec = $crate::rest::NestedResourceSpec::new(
                $relation,
                $plural,
                &[$($crate::nested_resource!(@operation $operation)),+],
            );
        }

        $($crate::nested_resource!(@marker $name, $operation);)+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CAPABILITIES: NestedResourceSpec = NestedResourceSpec::new(
        "capability",
        "capabilities",
        &[
            NestedOperation::Retrieve,
            NestedOperation::Update,
            NestedOperation::List,
        ],
    );

    #[test]
    fn test_shape_table() {
        let shapes: Vec<_> = NestedOperation::ALL
            .iter()
            .map(|operation| (operation.as_str(), operation.shape()))
            .collect();
        assert_eq!(
            shapes,
            vec![
                ("create", RequestShape { http_method: HttpMethod::Post, targets_member: false }),
                ("retrieve", RequestShape { http_method: HttpMethod::Get, targets_member: true }),
                ("update", RequestShape { http_method: HttpMethod::Patch, targets_member: true }),
                ("delete", RequestShape { http_method: HttpMethod::Delete, targets_member: true }),
                ("list", RequestShape { http_method: HttpMethod::Get, targets_member: false }),
            ]
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            CAPABILITIES.collection_path("/v1/accounts", "acct_1"),
            "/v1/accounts/acct_1/capabilities"
        );
        assert_eq!(
            CAPABILITIES.member_path("/v1/accounts", "acct_1", "card_payments"),
            "/v1/accounts/acct_1/capabilities/card_payments"
        );
    }

    #[test]
    fn test_request_encodes_both_ids() {
        let request = request(
            &CAPABILITIES,
            "/v1/accounts",
            NestedOperation::Update,
            "acct/1",
            Some("cap 2"),
            Params::new(),
            &RequestOptions::new(),
        )
        .unwrap();
        assert_eq!(request.http_method, HttpMethod::Patch);
        assert_eq!(request.path, "/v1/accounts/acct%2F1/capabilities/cap%202");
    }

    #[test]
    fn test_request_forwards_params_and_options() {
        let mut params = Params::new();
        params.insert("requested".to_string(), json!(true));
        let options = RequestOptions::new().idempotency_key("idem-7");

        let request = request(
            &CAPABILITIES,
            "/v1/accounts",
            NestedOperation::List,
            "acct_1",
            None,
            params.clone(),
            &options,
        )
        .unwrap();
        assert_eq!(request.params, params);
        assert_eq!(request.options, options);
    }

    #[test]
    fn test_undeclared_operation_is_rejected() {
        let result = request(
            &CAPABILITIES,
            "/v1/accounts",
            NestedOperation::Create,
            "acct_1",
            None,
            Params::new(),
            &RequestOptions::new(),
        );
        assert!(matches!(
            result,
            Err(ResourceError::UnsupportedOperation {
                resource: "capability",
                operation: "create"
            })
        ));
    }

    #[test]
    fn test_member_operation_needs_nested_id() {
        let result = request(
            &CAPABILITIES,
            "/v1/accounts",
            NestedOperation::Retrieve,
            "acct_1",
            None,
            Params::new(),
            &RequestOptions::new(),
        );
        assert!(matches!(result, Err(ResourceError::MissingId { .. })));
    }
}
