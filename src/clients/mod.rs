//! Request execution for the Stripe API.
//!
//! Resource operations never talk to the network directly. They describe a
//! call as an [`ApiRequest`] (method, absolute path, parameters, options) and
//! hand it to a [`RequestExecutor`], which returns the decoded response as a
//! [`StripeObject`](crate::rest::StripeObject) or an [`ApiError`].
//!
//! # Overview
//!
//! - [`RequestExecutor`]: The executor contract
//! - [`HttpClient`]: The reqwest-backed executor
//! - [`ApiRequest`] / [`RequestOptions`]: What gets executed
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`form`]: Form encoding of nested parameters
//! - [`ApiError`]: Everything an executor can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_resources::clients::{ApiRequest, HttpClient, HttpMethod, Params, RequestExecutor, RequestOptions};
//!
//! let client = HttpClient::new(&config)?;
//! let request = ApiRequest::new(HttpMethod::Get, "/v1/accounts/acct_123", Params::new(), RequestOptions::new());
//! let account = client.execute(request).await?;
//! ```

mod errors;
mod executor;
pub mod form;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, ApiResponseError, InvalidRequestError};
pub use executor::RequestExecutor;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{ApiRequest, HttpMethod, Params, RequestOptions};
pub use http_response::HttpResponse;
