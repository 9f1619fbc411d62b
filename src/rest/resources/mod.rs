//! Resource type implementations.
//!
//! Each resource wraps a [`StripeObject`](crate::rest::StripeObject) and
//! declares its [`ResourceConfig`], collection path and supported
//! operations:
//!
//! | Resource           | Object            | Operations                                   |
//! |--------------------|-------------------|----------------------------------------------|
//! | [`Account`]        | `account`         | create, retrieve, list, save, delete, `persons`, `reject` |
//! | [`Person`]         | `person`          | save, delete (under its account)             |
//! | [`IssuingDispute`] | `issuing.dispute` | create, retrieve, list, save, `submit`       |
//!
//! Account's nested relations are declared with
//! [`nested_resource!`](crate::nested_resource): [`AccountCapabilities`],
//! [`AccountPersons`], [`AccountExternalAccounts`] and [`AccountLoginLinks`].
//!
//! # Object registry
//!
//! [`config_for`] maps the `object` value of a response to the
//! configuration of its resource type, so objects decoded from any response
//! (including nested ones, such as an account's `individual`) carry the right
//! serialization rules.

mod account;
mod issuing_dispute;
mod person;

pub use account::{
    Account, AccountCapabilities, AccountExternalAccounts, AccountLoginLinks, AccountPersons,
    ACCOUNT_CONFIG,
};
pub use issuing_dispute::{IssuingDispute, ISSUING_DISPUTE_CONFIG};
pub use person::{Person, PERSON_CONFIG};

use crate::rest::ResourceConfig;

/// Returns the configuration registered for `object_name`, or
/// [`ResourceConfig::DEFAULT`] for unknown objects.
#[must_use]
pub fn config_for(object_name: &str) -> &'static ResourceConfig {
    match object_name {
        "account" => &ACCOUNT_CONFIG,
        "person" => &PERSON_CONFIG,
        "issuing.dispute" => &ISSUING_DISPUTE_CONFIG,
        _ => &ResourceConfig::DEFAULT,
    }
}
