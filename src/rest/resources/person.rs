//! Person resource implementation.
//!
//! People only exist under an account: their path is
//! `/v1/accounts/{account}/persons/{id}`, built from the person's own
//! `account` field.

use std::ops::{Deref, DerefMut};

use crate::rest::path::build_path;
use crate::rest::{ApiResource, Delete, ResourceConfig, ResourceError, Save, StripeObject};

/// Serialization rules for people.
pub const PERSON_CONFIG: ResourceConfig = ResourceConfig::new("person");

const MEMBER_TEMPLATE: &str = "/v1/accounts/{account}/persons/{id}";
const COLLECTION_TEMPLATE: &str = "/v1/accounts/{account}/persons";

/// A person associated with an account.
#[derive(Debug, Clone)]
pub struct Person(StripeObject);

impl Person {
    /// Returns the id of the account this person belongs to.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.0.get("account").and_then(|value| value.as_str())
    }

    fn require_account(&self, operation: &'static str) -> Result<&str, ResourceError> {
        self.account().ok_or(ResourceError::MissingId {
            resource: "account",
            operation,
        })
    }
}

impl ApiResource for Person {
    const OBJECT_NAME: &'static str = "person";
    const COLLECTION: &'static str = "/v1/accounts";
    const CONFIG: &'static ResourceConfig = &PERSON_CONFIG;

    fn from_object(object: StripeObject) -> Self {
        Self(object)
    }

    fn object(&self) -> &StripeObject {
        &self.0
    }

    fn object_mut(&mut self) -> &mut StripeObject {
        &mut self.0
    }

    fn resource_url(&self) -> Result<String, ResourceError> {
        let account = self.require_account("build a person path for")?;
        let id = self.0.id().ok_or(ResourceError::MissingId {
            resource: Self::OBJECT_NAME,
            operation: "build a path for",
        })?;
        Ok(build_path(MEMBER_TEMPLATE, &[("account", account), ("id", id)]))
    }

    fn create_path(&self) -> Result<String, ResourceError> {
        let account = self.require_account("create a person under")?;
        Ok(build_path(COLLECTION_TEMPLATE, &[("account", account)]))
    }
}

impl Save for Person {}
impl Delete for Person {}

impl Deref for Person {
    type Target = StripeObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Person {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
