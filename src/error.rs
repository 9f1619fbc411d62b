//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use stripe_resources::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`StripeConfig`](crate::StripeConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Stripe secret or restricted key.")]
    EmptyApiKey,

    /// API base URL is invalid.
    #[error("Invalid API base '{url}'. Please provide a URL with scheme (e.g., 'https://api.stripe.com').")]
    InvalidApiBase {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2024-06-20'), optionally followed by '.release'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
