//! Account resource implementation.
//!
//! Accounts carry the three serialization special cases:
//!
//! - `legal_entity` is protected. Assigning it wholesale fails; set its
//!   sub-fields instead.
//! - `legal_entity.additional_owners` uses the legacy index-keyed array
//!   encoding.
//! - `individual` holds a [`Person`](super::Person) and is sent as the
//!   person's own diff.
//!
//! An account without an id addresses the singleton `/v1/account` (the
//! account that owns the API key).

use std::ops::{Deref, DerefMut};

use crate::clients::{Params, RequestExecutor, RequestOptions};
use crate::nested_resource;
use crate::rest::{
    ApiResource, Create, Delete, DeleteById, List, ListObject, ResourceAction, ResourceConfig,
    ResourceError, Retrieve, Save, StripeObject, Update,
};

/// Serialization rules for accounts.
pub const ACCOUNT_CONFIG: ResourceConfig = ResourceConfig::new("account")
    .with_protected_fields(&["legal_entity"])
    .with_legacy_array_fields(&[&["legal_entity", "additional_owners"]])
    .with_nested_object_field("individual");

const PERSONS: ResourceAction = ResourceAction::get("persons");
const REJECT: ResourceAction = ResourceAction::post("reject");

/// A Stripe account.
///
/// Dereferences to its [`StripeObject`] for field access.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_resources::rest::Save;
/// use stripe_resources::rest::resources::Account;
///
/// let mut account = Account::retrieve(&client, Some("acct_123"), &options).await?;
/// account
///     .legal_entity_mut()
///     .and_then(|entity| entity.get_list_mut("additional_owners"))
///     .map(|owners| owners.push(json!({"first_name": "Joe"}).into()));
/// account.save(&client, &options).await?;
/// // legal_entity[additional_owners][1][first_name]=Joe
/// ```
#[derive(Debug, Clone)]
pub struct Account(StripeObject);

impl Account {
    /// The path of the account that owns the API key.
    pub const SINGLETON_PATH: &'static str = "/v1/account";

    /// Retrieves an account, or the API key's own account when `id` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    pub async fn retrieve<E: RequestExecutor>(
        executor: &E,
        id: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Self, ResourceError> {
        let mut account = id.map_or_else(<Self as ApiResource>::new, <Self as ApiResource>::with_id);
        account.refresh(executor, options).await?;
        Ok(account)
    }

    /// Lists the people associated with this account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account has no id, or
    /// [`ResourceError::Api`] if the request fails.
    pub async fn persons<E: RequestExecutor>(
        &self,
        executor: &E,
        params: Params,
        options: &RequestOptions,
    ) -> Result<ListObject, ResourceError> {
        PERSONS
            .call(executor, self, params, options)
            .await
            .map(ListObject::from_object)
    }

    /// Lists the people associated with the account `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    pub async fn persons_by_id<E: RequestExecutor>(
        executor: &E,
        id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<ListObject, ResourceError> {
        PERSONS
            .call_by_id::<Self, E>(executor, id, params, options)
            .await
            .map(ListObject::from_object)
    }

    /// Rejects this account and reloads it from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account has no id, or
    /// [`ResourceError::Api`] if the request fails.
    pub async fn reject<E: RequestExecutor>(
        &mut self,
        executor: &E,
        params: Params,
        options: &RequestOptions,
    ) -> Result<(), ResourceError> {
        let response = REJECT.call(executor, &*self, params, options).await?;
        self.0.refresh_from(response);
        Ok(())
    }

    /// Rejects the account `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    pub async fn reject_by_id<E: RequestExecutor>(
        executor: &E,
        id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<Self, ResourceError> {
        REJECT
            .call_by_id::<Self, E>(executor, id, params, options)
            .await
            .map(Self)
    }

    /// Returns the `legal_entity` object, if loaded.
    #[must_use]
    pub fn legal_entity(&self) -> Option<&StripeObject> {
        self.0.get("legal_entity").and_then(|value| value.as_object())
    }

    /// Returns the `legal_entity` object for modifying its sub-fields.
    pub fn legal_entity_mut(&mut self) -> Option<&mut StripeObject> {
        self.0.get_object_mut("legal_entity")
    }

    /// Returns the `individual` person, if loaded.
    #[must_use]
    pub fn individual(&self) -> Option<&StripeObject> {
        self.0.get("individual").and_then(|value| value.as_object())
    }

    /// Returns the `individual` person for modification.
    pub fn individual_mut(&mut self) -> Option<&mut StripeObject> {
        self.0.get_object_mut("individual")
    }
}

impl ApiResource for Account {
    const OBJECT_NAME: &'static str = "account";
    const COLLECTION: &'static str = "/v1/accounts";
    const CONFIG: &'static ResourceConfig = &ACCOUNT_CONFIG;

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
        Ok(self
            .0
            .id()
            .map_or_else(|| Self::SINGLETON_PATH.to_string(), Self::member_path))
    }
}

impl Create for Account {}
impl Retrieve for Account {}
impl List for Account {}
impl Save for Account {}
impl Update for Account {}
impl Delete for Account {}
impl DeleteById for Account {}

impl Deref for Account {
    type Target = StripeObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Account {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

nested_resource! {
    /// An account's capabilities (`/v1/accounts/{id}/capabilities`).
    pub struct AccountCapabilities for Account {
        relation: "capability",
        plural: "capabilities",
        operations: [retrieve, update, list],
    }
}

nested_resource! {
    /// The people on an account (`/v1/accounts/{id}/persons`).
    pub struct AccountPersons for Account {
        relation: "person",
        plural: "persons",
        operations: [create, retrieve, update, delete, list],
    }
}

nested_resource! {
    /// An account's bank accounts and cards
    /// (`/v1/accounts/{id}/external_accounts`).
    pub struct AccountExternalAccounts for Account {
        relation: "external_account",
        plural: "external_accounts",
        operations: [create, retrieve, update, delete, list],
    }
}

nested_resource! {
    /// Express dashboard login links (`/v1/accounts/{id}/login_links`).
    pub struct AccountLoginLinks for Account {
        relation: "login_link",
        plural: "login_links",
        operations: [create],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{NestedOperation, NestedRelation, SerializeOptions};
    use serde_json::json;

    fn account() -> Account {
        Account::from_object(StripeObject::construct_from(json!({
            "id": "acct_123",
            "object": "account",
            "legal_entity": {
                "first_name": "Jane",
                "additional_owners": [{"first_name": "Joe"}]
            },
            "individual": {
                "id": "person_1",
                "object": "person",
                "first_name": "Jane",
                "last_name": "Doe"
            }
        })))
    }

    #[test]
    fn test_resource_url_with_and_without_id() {
        assert_eq!(account().resource_url().unwrap(), "/v1/accounts/acct_123");
        assert_eq!(
            <Account as ApiResource>::new().resource_url().unwrap(),
            "/v1/account"
        );
    }

    #[test]
    fn test_legal_entity_cannot_be_reassigned() {
        let mut account = account();
        let result = account.set("legal_entity", json!({"first_name": "John"}));
        assert!(matches!(result, Err(ResourceError::InvalidOperation { .. })));
        assert_eq!(
            account.legal_entity().and_then(|entity| entity.get("first_name")).and_then(|v| v.as_str()),
            Some("Jane")
        );
    }

    #[test]
    fn test_individual_carries_person_config() {
        let account = account();
        assert_eq!(account.individual().unwrap().config().object_name, "person");
    }

    #[test]
    fn test_individual_change_is_sent_as_diff() {
        let mut account = account();
        account
            .individual_mut()
            .unwrap()
            .set("first_name", "Janet")
            .unwrap();
        let payload = account.serialize_params(SerializeOptions::new()).unwrap();
        assert_eq!(json!(payload), json!({"individual": {"first_name": "Janet"}}));
    }

    #[test]
    fn test_relation_declarations() {
        assert_eq!(AccountCapabilities::SPEC.plural, "capabilities");
        assert!(!AccountCapabilities::SPEC.supports(NestedOperation::Create));
        assert_eq!(AccountPersons::SPEC.operations.len(), 5);
        assert_eq!(AccountExternalAccounts::SPEC.relation, "external_account");
        assert_eq!(AccountLoginLinks::SPEC.operations, &[NestedOperation::Create]);
    }
}
