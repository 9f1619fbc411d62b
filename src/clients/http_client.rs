//! HTTP transport for the Stripe API.
//!
//! This module provides [`HttpClient`], the production
//! [`RequestExecutor`]: it form-encodes parameters, attaches authentication
//! and per-request headers, and decodes responses into [`StripeObject`]s.
//!
//! Each call sends exactly one request. There is no retry loop; callers that
//! want retries wrap the executor and reuse an idempotency key.

use std::collections::HashMap;

use crate::clients::errors::{ApiError, ApiResponseError};
use crate::clients::executor::RequestExecutor;
use crate::clients::http_request::{ApiRequest, HttpMethod};
use crate::clients::http_response::HttpResponse;
use crate::config::StripeConfig;
use crate::rest::StripeObject;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Stripe API.
///
/// The client handles:
/// - URL construction from the configured API base
/// - Default headers (`Authorization`, `Stripe-Version`, `User-Agent`)
/// - Per-request option headers (`Idempotency-Key`, `Stripe-Account`)
/// - Form encoding of parameters, including legacy index-keyed arrays
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_resources::{ApiKey, StripeConfig};
/// use stripe_resources::clients::{HttpClient, RequestOptions};
/// use stripe_resources::rest::resources::Account;
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let account = Account::retrieve(&client, Some("acct_123"), &RequestOptions::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: StripeConfig,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &StripeConfig) -> Result<Self, ApiError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}stripe-resources-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            config: config.clone(),
            default_headers,
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Computes the headers for `request`, applying its options over the
    /// configured defaults.
    #[must_use]
    pub fn request_headers(&self, request: &ApiRequest) -> HashMap<String, String> {
        let options = &request.options;
        let mut headers = self.default_headers.clone();

        let api_key = options
            .api_key
            .as_ref()
            .unwrap_or_else(|| self.config.api_key());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", api_key.as_ref()),
        );

        let config_version = self.config.api_version();
        let version = match &options.stripe_version {
            Some(version) if version == config_version => {
                tracing::warn!(
                    "Request has a redundant API version override to the default {}",
                    config_version
                );
                version
            }
            Some(version) => {
                tracing::debug!(
                    "Request overriding default API version {} with {}",
                    config_version,
                    version
                );
                version
            }
            None => config_version,
        };
        headers.insert("Stripe-Version".to_string(), version.to_string());

        if let Some(account) = options
            .stripe_account
            .as_deref()
            .or_else(|| self.config.stripe_account())
        {
            headers.insert("Stripe-Account".to_string(), account.to_string());
        }
        if let Some(key) = &options.idempotency_key {
            headers.insert("Idempotency-Key".to_string(), key.clone());
        }
        if !request.http_method.uses_query_params() {
            headers.insert(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            );
        }

        headers
    }

    /// Sends `request` and returns the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the request fails validation
    /// and [`ApiError::Network`] on connection failures.
    pub async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, ApiError> {
        request.verify()?;

        let encoded = request.encoded_params();
        let mut url = format!("{}{}", self.config.api_base().as_ref(), request.path);
        if request.http_method.uses_query_params() && !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in self.request_headers(request) {
            req_builder = req_builder.header(key, value);
        }

        if !request.http_method.uses_query_params() {
            req_builder = req_builder.body(encoded);
        }

        tracing::debug!(
            "Sending {} request to {} with {} top-level params",
            request.http_method,
            request.path,
            request.params.len()
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, headers, body);
        if response.idempotent_replayed() {
            tracing::debug!("Request to {} was an idempotent replay", request.path);
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap` with lowercase keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl RequestExecutor for HttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<StripeObject, ApiError> {
        let response = self.send(&request).await?;

        if !response.is_ok() {
            let error =
                ApiResponseError::from_body(response.code, &response.body, response.request_id());
            tracing::debug!(
                "Request to {} failed with {}: {}",
                request.path,
                error.code,
                error.message
            );
            return Err(error.into());
        }

        if !response.body.is_object() {
            return Err(ApiError::InvalidBody {
                path: request.path,
                body: response.body.to_string(),
            });
        }

        Ok(StripeObject::construct_from(response.body))
    }
}
