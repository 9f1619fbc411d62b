//! # Stripe Resources for Rust
//!
//! A client-side resource layer for the Stripe API: change-tracked resource
//! objects, minimal diff-based update payloads, and generated sub-resource
//! operations, on top of a pluggable request executor.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for the API key, API base URL and API version
//! - Change-tracked resources ([`rest::StripeObject`]) that remember what was
//!   loaded from the server
//! - Diff-based update payloads ([`rest::serialize`]), including the legacy
//!   index-keyed array encoding and protected fields
//! - Nested resource operations declared with [`nested_resource!`]
//! - A [`clients::RequestExecutor`] seam with a reqwest-backed
//!   [`clients::HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_resources::{StripeConfig, ApiKey, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Saving Changes
//!
//! Only fields changed since the resource was loaded are sent:
//!
//! ```rust,ignore
//! use stripe_resources::clients::{HttpClient, RequestOptions};
//! use stripe_resources::rest::Save;
//! use stripe_resources::rest::resources::Account;
//!
//! let client = HttpClient::new(&config)?;
//! let options = RequestOptions::new();
//!
//! let mut account = Account::retrieve(&client, Some("acct_123"), &options).await?;
//! account.set("email", "jane@example.com")?;
//! account.save(&client, &options).await?;   // email=jane%40example.com
//! ```
//!
//! ## Nested Resources
//!
//! ```rust,ignore
//! use stripe_resources::rest::{NestedCreate, NestedList};
//! use stripe_resources::rest::resources::AccountPersons;
//!
//! // POST /v1/accounts/acct_123/persons
//! let person = AccountPersons::create(&client, "acct_123", params, &options).await?;
//! // GET /v1/accounts/acct_123/persons
//! let people = AccountPersons::list(&client, "acct_123", Params::new(), &options).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (request dispatch and payload
//! construction at `debug`, per-index legacy array decisions at `trace`).
//! Install a subscriber in your application to see them.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, ApiVersion, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

// Re-export executor types
pub use clients::{
    ApiError, ApiRequest, HttpClient, HttpMethod, Params, RequestExecutor, RequestOptions,
};
