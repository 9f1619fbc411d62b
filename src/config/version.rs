//! Stripe API version definitions.
//!
//! Stripe versions are release dates (`2024-06-20`), optionally followed by
//! a named release suffix (`2024-09-30.acacia`). The version is sent in the
//! `Stripe-Version` header on every request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A validated Stripe API version.
///
/// # Example
///
/// ```rust
/// use stripe_resources::ApiVersion;
///
/// let version: ApiVersion = "2024-09-30.acacia".parse().unwrap();
/// assert_eq!(version.date(), "2024-09-30");
/// assert_eq!(version.release(), Some("acacia"));
///
/// assert!("2024-13-01".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The version this library was written against.
    pub const PINNED: &'static str = "2024-06-20";

    /// Returns the pinned API version.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::PINNED.to_string())
    }

    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the date part is not a
    /// valid `YYYY-MM-DD` date or the release suffix is empty or not
    /// alphanumeric.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let invalid = || ConfigError::InvalidApiVersion {
            version: version.clone(),
        };

        let (date, release) = match version.split_once('.') {
            Some((date, release)) => (date, Some(release)),
            None => (version.as_str(), None),
        };

        if !is_valid_date(date) {
            return Err(invalid());
        }
        if let Some(release) = release {
            if release.is_empty() || !release.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
        }

        Ok(Self(version))
    }

    /// Returns the date part of the version.
    #[must_use]
    pub fn date(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(date, _)| date)
    }

    /// Returns the named release suffix, if any.
    #[must_use]
    pub fn release(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, release)| release)
    }
}

fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &date[range];
        if part.chars().all(|c| c.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };
    matches!(
        (digits(0..4), digits(5..7), digits(8..10)),
        (Some(_), Some(1..=12), Some(1..=31))
    )
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_the_pinned_version() {
        assert_eq!(ApiVersion::latest().to_string(), ApiVersion::PINNED);
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }

    #[test]
    fn test_parses_date_versions() {
        let version: ApiVersion = "2023-10-16".parse().unwrap();
        assert_eq!(version.date(), "2023-10-16");
        assert_eq!(version.release(), None);
    }

    #[test]
    fn test_parses_named_release_versions() {
        let version = ApiVersion::new("2024-09-30.acacia").unwrap();
        assert_eq!(version.date(), "2024-09-30");
        assert_eq!(version.release(), Some("acacia"));
        assert_eq!(version.as_ref(), "2024-09-30.acacia");
    }

    #[test]
    fn test_rejects_malformed_versions() {
        for bad in ["", "2024", "2024-6-20", "2024-00-10", "2024-06-32", "2024-06-20.", "v2024-06-20", "2024-06-20.a-b"] {
            assert!(
                matches!(ApiVersion::new(bad), Err(ConfigError::InvalidApiVersion { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
