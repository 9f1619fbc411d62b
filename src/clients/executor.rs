//! The request executor seam.
//!
//! Resource operations describe *what* to send as an [`ApiRequest`] and hand
//! it to a [`RequestExecutor`]. The executor owns transport, authentication
//! and response decoding. [`HttpClient`](crate::clients::HttpClient) is the
//! production implementation; tests substitute a recording executor.

use crate::clients::{ApiError, ApiRequest};
use crate::rest::StripeObject;

/// Performs one request and decodes the response into a [`StripeObject`].
///
/// Implementations must send exactly one request per call and must not
/// retry; errors are returned as-is.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_resources::clients::{ApiError, ApiRequest, RequestExecutor};
/// use stripe_resources::rest::StripeObject;
///
/// struct Echo;
///
/// impl RequestExecutor for Echo {
///     async fn execute(&self, request: ApiRequest) -> Result<StripeObject, ApiError> {
///         Ok(StripeObject::construct_from(json!({"path": request.path})))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait RequestExecutor {
    /// Executes `request`, returning the decoded response object.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx responses.
    async fn execute(&self, request: ApiRequest) -> Result<StripeObject, ApiError>;
}

impl<T: RequestExecutor + ?Sized> RequestExecutor for &T {
    async fn execute(&self, request: ApiRequest) -> Result<StripeObject, ApiError> {
        (**self).execute(request).await
    }
}
