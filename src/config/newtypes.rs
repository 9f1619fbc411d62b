//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Stripe API key.
///
/// The key is never printed: the `Debug` implementation only reveals the
/// key's mode prefix (`sk_test`, `rk_live`, ...), which is enough to tell
/// keys apart in logs without exposing them.
///
/// # Example
///
/// ```rust
/// use stripe_resources::ApiKey;
///
/// let key = ApiKey::new("sk_test_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_123");
/// assert_eq!(format!("{:?}", key), "ApiKey(sk_test_*****)");
/// assert!(!key.is_live());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Returns `true` for live-mode keys (`sk_live_...`, `rk_live_...`).
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.contains("_live_")
    }

    fn mode_prefix(&self) -> Option<&str> {
        let mut parts = self.0.splitn(3, '_');
        let kind = parts.next()?;
        let mode = parts.next()?;
        parts.next()?;
        Some(&self.0[..kind.len() + 1 + mode.len()])
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode_prefix() {
            Some(prefix) => write!(f, "ApiKey({prefix}_*****)"),
            None => f.write_str("ApiKey(*****)"),
        }
    }
}

/// A validated API base URL (scheme and host, optional port and path).
///
/// Trailing slashes are stripped so that request paths (which always start
/// with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use stripe_resources::ApiBase;
///
/// let base = ApiBase::new("https://api.stripe.com/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.stripe.com");
/// assert_eq!(base.scheme(), "https");
/// assert_eq!(base.host_name(), "api.stripe.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl ApiBase {
    /// The production Stripe API host.
    pub const DEFAULT: &'static str = "https://api.stripe.com";

    /// Creates a new validated API base.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiBase { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiBase { url });
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(ConfigError::InvalidApiBase { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_masks_secret() {
        let key = ApiKey::new("sk_live_abcdef").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(sk_live_*****)");
        assert!(!debug.contains("abcdef"));
        assert!(key.is_live());

        let opaque = ApiKey::new("opaque").unwrap();
        assert_eq!(format!("{opaque:?}"), "ApiKey(*****)");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let base = ApiBase::new("http://localhost:12111/").unwrap();
        assert_eq!(base.as_ref(), "http://localhost:12111");
        assert_eq!(base.scheme(), "http");
        assert_eq!(base.host_name(), "localhost");
    }

    #[test]
    fn test_api_base_rejects_missing_scheme_or_host() {
        assert!(ApiBase::new("api.stripe.com").is_err());
        assert!(ApiBase::new("https://").is_err());
        assert!(ApiBase::new("1http://x").is_err());
    }

    #[test]
    fn test_api_base_default_matches_parsed_default() {
        assert_eq!(ApiBase::default(), ApiBase::new(ApiBase::DEFAULT).unwrap());
    }
}
