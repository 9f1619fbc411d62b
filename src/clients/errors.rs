//! Error types returned by request executors.
//!
//! - [`ApiResponseError`]: A non-2xx response, parsed from Stripe's error body
//! - [`InvalidRequestError`]: A request that failed validation before sending
//! - [`ApiError`]: Unified error type encompassing all executor failures
//!
//! Resource operations never interpret an [`ApiError`]; it is propagated to
//! the caller unchanged inside [`ResourceError::Api`](crate::rest::ResourceError::Api).
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_resources::clients::ApiError;
//!
//! match account.save(&client, &RequestOptions::new()).await {
//!     Ok(()) => {}
//!     Err(ResourceError::Api(ApiError::Response(e))) => {
//!         println!("{} ({}): {}", e.code, e.error_type.as_deref().unwrap_or("?"), e.message);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// Stripe error bodies have the shape
/// `{"error": {"type": ..., "message": ..., "code": ..., "param": ...}}`;
/// every field is optional here so unexpected bodies still produce an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error type (`invalid_request_error`, `card_error`, ...).
    pub error_type: Option<String>,
    /// Human readable message.
    pub message: String,
    /// Machine readable error code, when present.
    pub error_code: Option<String>,
    /// The parameter the error relates to, when present.
    pub param: Option<String>,
    /// The `Request-Id` header of the failed response.
    pub request_id: Option<String>,
}

impl ApiResponseError {
    /// Builds an error from a response status and JSON body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use stripe_resources::clients::ApiResponseError;
    ///
    /// let body = json!({"error": {"type": "invalid_request_error", "message": "No such account", "param": "id"}});
    /// let error = ApiResponseError::from_body(404, &body, Some("req_123"));
    /// assert_eq!(error.message, "No such account");
    /// assert_eq!(error.param.as_deref(), Some("id"));
    /// ```
    #[must_use]
    pub fn from_body(code: u16, body: &Value, request_id: Option<&str>) -> Self {
        let error = body.get("error");
        let field = |name: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };

        let message = field("message").unwrap_or_else(|| match body {
            Value::Object(map) if map.is_empty() => format!("HTTP {code}"),
            other => other.to_string(),
        });

        Self {
            code,
            error_type: field("type"),
            message,
            error_code: field("code"),
            param: field("param"),
            request_id: request_id.map(ToString::to_string),
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path was not absolute.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The offending path.
        path: String,
    },
}

/// Unified error type for request execution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A successful response whose body was not a JSON object.
    #[error("Response body from {path} is not a JSON object: {body}")]
    InvalidBody {
        /// The request path.
        path: String,
        /// The raw body text.
        body: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Returns the request ID if the server assigned one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<ApiResponseError>();
};
