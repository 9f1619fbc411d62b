//! Resource representation for the Stripe API.
//!
//! This module turns API responses into mutable, change-tracked resources
//! and turns local changes back into minimal update payloads:
//!
//! - **[`StripeObject`]**: field values plus the snapshot last loaded from
//!   the server
//! - **[`serialize`] / [`ParamSerializer`]**: diff-based update payloads
//! - **[`ArrayFieldEncoder`]**: legacy index-keyed array encoding
//! - **[`ResourceConfig`]**: per-type rules (protected fields, legacy
//!   arrays, the singular nested object field, additive fields)
//! - **[`ApiResource`]** and the operation traits ([`Create`],
//!   [`Retrieve`], [`List`], [`Save`], [`Update`], [`Delete`],
//!   [`DeleteById`])
//! - **[`nested`]**: sub-resource operations scoped under a parent id
//! - **[`resources`]**: Account, Person and Issuing Dispute
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_resources::rest::{NestedCreate, Save};
//! use stripe_resources::rest::resources::{Account, AccountPersons};
//!
//! let mut account = Account::retrieve(&client, Some("acct_123"), &options).await?;
//! account.set("email", "jane@example.com")?;
//! account.save(&client, &options).await?;   // POST /v1/accounts/acct_123 email=...
//!
//! let person = AccountPersons::create(&client, "acct_123", params, &options).await?;
//! ```

mod config;
mod errors;
mod legacy_array;
mod list;
mod object;
mod path;
mod resource;
mod serializer;
mod value;

pub mod nested;
pub mod resources;

pub use config::ResourceConfig;
pub use errors::ResourceError;
pub use legacy_array::ArrayFieldEncoder;
pub use list::ListObject;
pub use nested::{
    NestedCreate, NestedDelete, NestedList, NestedOperation, NestedRelation, NestedResourceSpec,
    NestedRetrieve, NestedUpdate, RequestShape,
};
pub use object::StripeObject;
pub use path::{action_path, build_path, encode_segment, member_path};
pub use resource::{
    ApiResource, Create, Delete, DeleteById, List, ResourceAction, Retrieve, Save, Update,
};
pub use serializer::{serialize, ParamSerializer, SerializeOptions, UpdatePayload};
pub use value::FieldValue;
