//! Issuing dispute resource implementation.

use std::ops::{Deref, DerefMut};

use crate::clients::{Params, RequestExecutor, RequestOptions};
use crate::rest::{
    ApiResource, Create, List, ResourceAction, ResourceConfig, ResourceError, Retrieve, Save,
    StripeObject, Update,
};

/// Serialization rules for issuing disputes.
pub const ISSUING_DISPUTE_CONFIG: ResourceConfig = ResourceConfig::new("issuing.dispute");

const SUBMIT: ResourceAction = ResourceAction::post("submit");

/// A dispute of an Issuing transaction.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_resources::rest::resources::IssuingDispute;
///
/// // Both send POST /v1/issuing/disputes/idp_123/submit
/// dispute.submit(&client, Params::new(), &options).await?;
/// IssuingDispute::submit_by_id(&client, "idp_123", Params::new(), &options).await?;
/// ```
#[derive(Debug, Clone)]
pub struct IssuingDispute(StripeObject);

impl IssuingDispute {
    /// Submits this dispute to the card network and reloads it from the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the dispute has no id, or
    /// [`ResourceError::Api`] if the request fails.
    pub async fn submit<E: RequestExecutor>(
        &mut self,
        executor: &E,
        params: Params,
        options: &RequestOptions,
    ) -> Result<(), ResourceError> {
        let response = SUBMIT.call(executor, &*self, params, options).await?;
        self.0.refresh_from(response);
        Ok(())
    }

    /// Submits the dispute `id` to the card network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails.
    pub async fn submit_by_id<E: RequestExecutor>(
        executor: &E,
        id: &str,
        params: Params,
        options: &RequestOptions,
    ) -> Result<Self, ResourceError> {
        SUBMIT
            .call_by_id::<Self, E>(executor, id, params, options)
            .await
            .map(Self)
    }
}

impl ApiResource for IssuingDispute {
    const OBJECT_NAME: &'static str = "issuing.dispute";
    const COLLECTION: &'static str = "/v1/issuing/disputes";
    const CONFIG: &'static ResourceConfig = &ISSUING_DISPUTE_CONFIG;

    fn from_object(object: StripeObject) -> Self {
        Self(object)
    }

    fn object(&self) -> &StripeObject {
        &self.0
    }

    fn object_mut(&mut self) -> &mut StripeObject {
        &mut self.0
    }
}

impl Create for IssuingDispute {}
impl Retrieve for IssuingDispute {}
impl List for IssuingDispute {}
impl Save for IssuingDispute {}
impl Update for IssuingDispute {}

impl Deref for IssuingDispute {
    type Target = StripeObject;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for IssuingDispute {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        let dispute = IssuingDispute::with_id("idp_123");
        assert_eq!(dispute.resource_url().unwrap(), "/v1/issuing/disputes/idp_123");
        assert_eq!(
            SUBMIT
                .request(IssuingDispute::COLLECTION, "idp_123", Params::new(), &RequestOptions::new())
                .path,
            "/v1/issuing/disputes/idp_123/submit"
        );
    }

    #[test]
    fn test_metadata_change_is_the_whole_payload() {
        let mut dispute = IssuingDispute::from_object(StripeObject::construct_from(json!({
            "id": "idp_123",
            "object": "issuing.dispute",
            "status": "unsubmitted",
            "metadata": {"case": "41"}
        })));
        assert_eq!(dispute.config().object_name, "issuing.dispute");

        dispute.set("metadata", json!({"case": "42"})).unwrap();
        let payload = dispute
            .serialize_params(crate::rest::SerializeOptions::new())
            .unwrap();
        assert_eq!(json!(payload), json!({"metadata": {"case": "42"}}));
    }
}
