//! Resource traits for top-level API operations.
//!
//! A resource type is a thin wrapper around a [`StripeObject`] that
//! implements [`ApiResource`] (its collection path and [`ResourceConfig`]).
//! Each top-level operation is a separate trait with a default
//! implementation, so a resource opts into exactly the operations the API
//! offers for it:
//!
//! | Trait        | Method                        | Request                       |
//! |--------------|-------------------------------|-------------------------------|
//! | [`Create`]   | `create`                      | `POST {collection}`           |
//! | [`Retrieve`] | `retrieve`, `refresh`         | `GET {resource_url}`          |
//! | [`List`]     | `list`                        | `GET {collection}`            |
//! | [`Save`]     | `save`                        | `POST {resource_url}`         |
//! | [`Update`]   | `update`                      | `POST {collection}/{id}`      |
//! | [`Delete`]   | `delete`                      | `DELETE {resource_url}`       |
//! | [`DeleteById`] | `delete_by_id`              | `DELETE {collection}/{id}`    |
//!
//! Named actions such as `reject` or `submit` are built from a
//! [`ResourceAction`], which produces the same request whether it is called
//! on an instance or with a bare id.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_resources::rest::{Retrieve, Save};
//! use stripe_resources::rest::resources::IssuingDispute;
//!
//! let mut dispute = IssuingDispute::retrieve(&client, "idp_123", &options).await?;
//! dispute.set("metadata", json!({"case": "42"}))?;
//! dispute.save(&client, &options).await?;   // sends only metadata
//! ```

use crate::clients::{ApiRequest, HttpMethod, Params, RequestExecutor, RequestOptions};
use crate::rest::path::{action_path, member_path};
use crate::rest::{
    serialize, ListObject, ResourceConfig, ResourceError, SerializeOptions, StripeObject,
    UpdatePayload,
};

/// A typed resource backed by a [`StripeObject`].
pub trait ApiResource: Sized {
    /// The `object` value of this resource type.
    const OBJECT_NAME: &'static str;

    /// The collection path, e.g. `/v1/accounts`.
    const COLLECTION: &'static str;

    /// Serialization rules for this resource type.
    const CONFIG: &'static ResourceConfig;

    /// Wraps a decoded object.
    fn from_object(object: StripeObject) -> Self;

    /// Returns the underlying object.
    fn object(&self) -> &StripeObject;

    /// Returns the underlying object mutably.
    fn object_mut(&mut self) -> &mut StripeObject;

    /// Creates a new, unsaved resource.
    #[must_use]
    fn new() -> Self {
        Self::from_object(StripeObject::new(Self::CONFIG))
    }

    /// Creates a resource that refers to an existing id without loading it.
    #[must_use]
    fn with_id(id: &str) -> Self {
        Self::from_object(StripeObject::with_id(Self::CONFIG, id))
    }

    /// Returns the resource's id, if it has one.
    fn id(&self) -> Option<&str> {
        self.object().id()
    }

    /// Returns the path of the resource with the given id.
    #[must_use]
    fn member_path(id: &str) -> String {
        member_path(Self::COLLECTION, id)
    }

    /// Returns this resource's own path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no id.
    fn resource_url(&self) -> Result<String, ResourceError> {
        self.id()
            .map(Self::member_path)
            .ok_or(ResourceError::MissingId {
                resource: Self::OBJECT_NAME,
                operation: "build a path for",
            })
    }

    /// Returns the path new resources of this type are created at.
    ///
    /// # Errors
    ///
    /// Resources created under a parent return an error when the parent id
    /// is missing.
    fn create_path(&self) -> Result<String, ResourceError> {
        Ok(Self::COLLECTION.to_string())
    }

    /// Builds the update payload for this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedDeletion`] if a legacy array
    /// shrank.
    fn serialize_params(&self, options: SerializeOptions) -> Result<UpdatePayload, ResourceError> {
        serialize(self.object(), options)
    }
}

/// Sends `request` and returns the decoded response.
pub(crate) async fn execute<E: RequestExecutor>(
    executor: &E,
    request: ApiRequest,
) -> Result<StripeObject, ResourceError> {
    tracing::debug!("{} {}", request.http_method, request.path);
    Ok(executor.execute(request).await?)
}

/// `POST {collection}`.
#[allow(async_fn_in_trait)]
pub trait Create: ApiResource {
    /// Creates a resource from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn create<E: RequestExecutor>(
        executor: &E,
        params: Params,
        options: &RequestOptions,
    ) -> Result<Self, ResourceError> {
        let request = ApiRequest::new(HttpMethod::Post, Self::COLLECTION, params, options.clone());
        execute(executor, request).await.map(Self::from_object)
    }
}

/// `GET {resource_url}`.
#[allow(async_fn_in_trait)]
pub trait Retrieve: ApiResource {
    /// Loads the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn retrieve<E: RequestExecutor>(
        executor: &E,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Self, ResourceError> {
        let mut resource = Self::with_id(id);
        resource.refresh(executor, options).await?;
        Ok(resource)
    }

    /// Reloads this resource, discarding local changes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no path, or
    /// [`ResourceError::Api`] if the request fails.
    async fn refresh<E: RequestExecutor>(
        &mut self,
        executor: &E,
        options: &RequestOptions,
    ) -> Result<(), ResourceError> {
        let request = ApiRequest::new(
            HttpMethod::Get,
            self.resource_url()?,
            Params::new(),
            options.clone(),
        );
        let response = execute(executor, request).await?;
        self.object_mut().refresh_from(response);
        Ok(())
    }
}

/// `GET {collection}`.
#[allow(async_fn_in_trait)]
pub trait List: ApiResource {
    /// Lists one page of resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn list<E: RequestExecutor>(
        executor: &E,
        params: Params,
        options: &RequestOptions,
    ) -> Result<ListObject, ResourceError> {
        let request = ApiRequest::new(HttpMethod::Get, Self::COLLECTION, params, options.clone());
        execute(executor, request).await.map(ListObject::from_object)
    }
}

/// Diff-based save.
#[allow(async_fn_in_trait)]
pub trait Save: ApiResource {
    /// Sends the fields changed since the last load, then reloads this
    /// resource from the response.
    ///
    /// Resources without an id are created instead. The payload is built
    /// before any request, so serialization errors never reach the network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedDeletion`] if a legacy array
    /// shrank, or [`ResourceError::Api`] if the request fails.
    async fn save<E: RequestExecutor>(
        &mut self,
        executor: &E,
        options: &RequestOptions,
    ) -> Result<(), ResourceError> {
        let params = self.serialize_params(SerializeOptions::new())?;
        let path = if self.id().is_some() {
            self.resource_url()?
        } else {
            self.create_path()?
        };

        let request = ApiRequest::new(HttpMethod::Post, path, params, options.clone());
        let response = execute(executor, request).await?;
        self.object_mut().refresh_from(response);
        Ok(())
    }
}

/// `POST {collection}/{id}` for a bare id.
///
/// Only resources whose path is determined by their id alone implement this.
#[allow(async_fn_in_trait)]
pub trait Update: ApiResource {
    /// Updates the resource with the given id from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn update<E: RequestExecutor>(
        executor: &E,
        id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<Self, ResourceError> {
        let request = ApiRequest::new(HttpMethod::Post, Self::member_path(id), params, options.clone());
        execute(executor, request).await.map(Self::from_object)
    }
}

/// `DELETE {resource_url}`.
#[allow(async_fn_in_trait)]
pub trait Delete: ApiResource {
    /// Deletes this resource and loads the deletion response into it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no id, or
    /// [`ResourceError::Api`] if the request fails.
    async fn delete<E: RequestExecutor>(
        &mut self,
        executor: &E,
        options: &RequestOptions,
    ) -> Result<(), ResourceError> {
        if self.id().is_none() {
            return Err(ResourceError::MissingId {
                resource: Self::OBJECT_NAME,
                operation: "delete",
            });
        }
        let request = ApiRequest::new(
            HttpMethod::Delete,
            self.resource_url()?,
            Params::new(),
            options.clone(),
        );
        let response = execute(executor, request).await?;
        self.object_mut().refresh_from(response);
        Ok(())
    }
}

/// `DELETE {collection}/{id}` for a bare id.
#[allow(async_fn_in_trait)]
pub trait DeleteById: ApiResource {
    /// Deletes the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    async fn delete_by_id<E: RequestExecutor>(
        executor: &E,
        id: &str,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        let request = ApiRequest::new(
            HttpMethod::Delete,
            Self::member_path(id),
            Params::new(),
            options.clone(),
        );
        execute(executor, request).await
    }
}

/// A named action on one member of a collection
/// (`{collection}/{id}/{action}`).
///
/// Instance-bound and id-based calls both go through
/// [`ResourceAction::request`], so they produce identical requests for the
/// same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceAction {
    /// The action's path segment.
    pub name: &'static str,
    /// The HTTP method used.
    pub http_method: HttpMethod,
}

impl ResourceAction {
    /// A `POST` action.
    #[must_use]
    pub const fn post(name: &'static str) -> Self {
        Self {
            name,
            http_method: HttpMethod::Post,
        }
    }

    /// A `GET` action.
    #[must_use]
    pub const fn get(name: &'static str) -> Self {
        Self {
            name,
            http_method: HttpMethod::Get,
        }
    }

    /// Builds the request for this action on `id` in `collection`.
    #[must_use]
    pub fn request(
        &self,
        collection: &str,
        id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> ApiRequest {
        ApiRequest::new(
            self.http_method,
            action_path(collection, id, self.name),
            params,
            options.clone(),
        )
    }

    /// Runs this action for `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no id, or
    /// [`ResourceError::Api`] if the request fails.
    pub async fn call<R: ApiResource, E: RequestExecutor>(
        &self,
        executor: &E,
        resource: &R,
        params: Params,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        let id = resource.id().ok_or(ResourceError::MissingId {
            resource: R::OBJECT_NAME,
            operation: self.name,
        })?;
        self.call_by_id::<R, E>(executor, id, params, options).await
    }

    /// Runs this action for the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    pub async fn call_by_id<R: ApiResource, E: RequestExecutor>(
        &self,
        executor: &E,
        id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<StripeObject, ResourceError> {
        execute(executor, self.request(R::COLLECTION, id, params, options)).await
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceAction>();
};
