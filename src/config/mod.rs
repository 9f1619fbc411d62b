//! Configuration types for the Stripe client.
//!
//! # Overview
//!
//! - [`StripeConfig`]: The configuration struct holding all client settings
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`ApiKey`]: A validated API key with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`ApiVersion`]: The Stripe API version to send with requests
//!
//! # Example
//!
//! ```rust
//! use stripe_resources::{StripeConfig, ApiKey, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base().as_ref(), "https://api.stripe.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiBase, ApiKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Stripe client.
///
/// `StripeConfig` is `Clone`, `Send`, and `Sync`; a single instance can back
/// any number of [`HttpClient`](crate::clients::HttpClient)s.
#[derive(Clone, Debug)]
pub struct StripeConfig {
    api_key: ApiKey,
    api_base: ApiBase,
    api_version: ApiVersion,
    stripe_account: Option<String>,
    user_agent_prefix: Option<String>,
}

impl StripeConfig {
    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the default API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default connected account, if configured.
    #[must_use]
    pub fn stripe_account(&self) -> Option<&str> {
        self.stripe_account.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for constructing [`StripeConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `api_base`: `https://api.stripe.com`
/// - `api_version`: [`ApiVersion::latest`]
/// - `stripe_account`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    stripe_account: Option<String>,
    user_agent_prefix: Option<String>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the connected account every request is made on behalf of.
    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StripeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(StripeConfig {
            api_key,
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            stripe_account: self.stripe_account,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = StripeConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_base(), &ApiBase::default());
        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.stripe_account().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_base(ApiBase::new("http://localhost:12111").unwrap())
            .api_version(ApiVersion::new("2023-10-16").unwrap())
            .stripe_account("acct_123")
            .user_agent_prefix("MyPlatform/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_base().as_ref(), "http://localhost:12111");
        assert_eq!(config.api_version().as_ref(), "2023-10-16");
        assert_eq!(config.stripe_account(), Some("acct_123"));
        assert_eq!(config.user_agent_prefix(), Some("MyPlatform/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_supersecret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StripeConfig"));
        assert!(!debug_str.contains("supersecret"));
    }
}
