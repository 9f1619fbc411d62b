//! Request types passed to a [`RequestExecutor`](crate::clients::RequestExecutor).
//!
//! An [`ApiRequest`] is the complete description of one outbound call:
//! HTTP method, absolute path, parameters and per-request options. Resource
//! operations only ever build `ApiRequest`s; turning them into bytes on the
//! wire is the executor's job.

use std::fmt;

use serde_json::{Map, Value};

use crate::clients::errors::InvalidRequestError;
use crate::clients::form;
use crate::config::{ApiKey, ApiVersion};

/// Request parameters: a JSON object encoded as nested form fields.
pub type Params = Map<String, Value>;

/// HTTP methods used by the Stripe API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PATCH method for nested resource updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters travel in the query string rather than the body.
    #[must_use]
    pub const fn uses_query_params(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Per-request options, forwarded verbatim to the executor.
///
/// Every field is optional; unset fields fall back to the executor's
/// configuration.
///
/// # Example
///
/// ```rust
/// use stripe_resources::clients::RequestOptions;
/// use stripe_resources::ApiKey;
///
/// let options = RequestOptions::new()
///     .api_key(ApiKey::new("sk_test_other").unwrap())
///     .idempotency_key("order-42-capture")
///     .stripe_account("acct_123");
///
/// assert_eq!(options.idempotency_key.as_deref(), Some("order-42-capture"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the configured API key for this request.
    pub api_key: Option<ApiKey>,
    /// Sent as the `Idempotency-Key` header.
    pub idempotency_key: Option<String>,
    /// Sent as the `Stripe-Account` header.
    pub stripe_account: Option<String>,
    /// Overrides the configured API version for this request.
    pub stripe_version: Option<ApiVersion>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key override.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the idempotency key.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Sets the connected account.
    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Sets the API version override.
    #[must_use]
    pub fn stripe_version(mut self, version: ApiVersion) -> Self {
        self.stripe_version = Some(version);
        self
    }
}

/// A fully described call to the API.
///
/// Two `ApiRequest`s that compare equal produce byte-identical requests on
/// the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute path, e.g. `/v1/accounts/acct_123`.
    pub path: String,
    /// Parameters sent as query string or form body.
    pub params: Params,
    /// Per-request options.
    pub options: RequestOptions,
}

impl ApiRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(
        http_method: HttpMethod,
        path: impl Into<String>,
        params: Params,
        options: RequestOptions,
    ) -> Self {
        Self {
            http_method,
            path: path.into(),
            params,
            options,
        }
    }

    /// Validates the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::RelativePath`] if the path does not
    /// start with `/`.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidRequestError::RelativePath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Returns the parameters in `application/x-www-form-urlencoded` form.
    #[must_use]
    pub fn encoded_params(&self) -> String {
        form::encode(&self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_query_param_methods() {
        assert!(HttpMethod::Get.uses_query_params());
        assert!(HttpMethod::Delete.uses_query_params());
        assert!(!HttpMethod::Post.uses_query_params());
        assert!(!HttpMethod::Patch.uses_query_params());
    }

    #[test]
    fn test_verify_rejects_relative_path() {
        let request = ApiRequest::new(
            HttpMethod::Get,
            "v1/accounts",
            Params::new(),
            RequestOptions::new(),
        );
        assert!(matches!(
            request.verify(),
            Err(InvalidRequestError::RelativePath { .. })
        ));
    }

    #[test]
    fn test_encoded_params_uses_form_encoding() {
        let mut params = Params::new();
        params.insert("limit".to_string(), json!(3));
        params.insert("metadata".to_string(), json!({"order": "42"}));

        let request = ApiRequest::new(
            HttpMethod::Post,
            "/v1/accounts",
            params,
            RequestOptions::new(),
        );
        assert_eq!(request.encoded_params(), "limit=3&metadata[order]=42");
    }
}
