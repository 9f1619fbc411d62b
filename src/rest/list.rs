//! List objects returned by collection endpoints.

use serde_json::Value;

use crate::rest::{ApiResource, FieldValue, StripeObject};

/// One page of a collection (`"object": "list"`).
///
/// Following further pages is left to the caller: pass the last item's id as
/// `starting_after` to the same list operation.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_resources::rest::{ListObject, StripeObject};
///
/// let list = ListObject::from_object(StripeObject::construct_from(json!({
///     "object": "list",
///     "url": "/v1/accounts/acct_123/persons",
///     "has_more": false,
///     "data": [{"id": "person_1", "object": "person"}]
/// })));
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.data[0].id(), Some("person_1"));
/// assert_eq!(list.url.as_deref(), Some("/v1/accounts/acct_123/persons"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListObject {
    /// The items on this page.
    pub data: Vec<StripeObject>,
    /// Whether more items exist after this page.
    pub has_more: bool,
    /// The collection path this page was fetched from.
    pub url: Option<String>,
}

impl ListObject {
    /// Builds a list from a decoded response. Non-object items are skipped.
    #[must_use]
    pub fn from_object(object: StripeObject) -> Self {
        let has_more = object
            .get("has_more")
            .and_then(|value| match value {
                FieldValue::Scalar(Value::Bool(has_more)) => Some(*has_more),
                _ => None,
            })
            .unwrap_or(false);
        let url = object.get("url").and_then(FieldValue::as_str).map(String::from);

        let data = object
            .into_values()
            .remove("data")
            .and_then(|data| match data {
                FieldValue::List(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| match item {
                FieldValue::Object(object) => Some(object),
                _ => None,
            })
            .collect();

        Self {
            data,
            has_more,
            url,
        }
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, StripeObject> {
        self.data.iter()
    }

    /// Converts the items into a typed resource.
    #[must_use]
    pub fn into_resources<T: ApiResource>(self) -> Vec<T> {
        self.data.into_iter().map(T::from_object).collect()
    }
}

impl IntoIterator for ListObject {
    type Item = StripeObject;
    type IntoIter = std::vec::IntoIter<StripeObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a ListObject {
    type Item = &'a StripeObject;
    type IntoIter = std::slice::Iter<'a, StripeObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::Person;
    use serde_json::json;

    fn page() -> StripeObject {
        StripeObject::construct_from(json!({
            "object": "list",
            "url": "/v1/accounts/acct_123/persons",
            "has_more": true,
            "data": [
                {"id": "person_1", "object": "person", "first_name": "Jane"},
                {"id": "person_2", "object": "person", "first_name": "Joe"},
                "not-an-object"
            ]
        }))
    }

    #[test]
    fn test_from_object_reads_page_fields() {
        let list = ListObject::from_object(page());
        assert_eq!(list.len(), 2);
        assert!(list.has_more);
        assert_eq!(list.url.as_deref(), Some("/v1/accounts/acct_123/persons"));
        let ids: Vec<_> = list.iter().filter_map(StripeObject::id).collect();
        assert_eq!(ids, vec!["person_1", "person_2"]);
    }

    #[test]
    fn test_items_keep_their_loaded_state() {
        let list = ListObject::from_object(page());
        assert!(list.data.iter().all(|person| !person.is_dirty()));
        assert_eq!(list.data[0].config().object_name, "person");
    }

    #[test]
    fn test_missing_fields_default() {
        let list = ListObject::from_object(StripeObject::construct_from(json!({"object": "list"})));
        assert!(list.is_empty());
        assert!(!list.has_more);
        assert!(list.url.is_none());
    }

    #[test]
    fn test_into_resources() {
        let people: Vec<Person> = ListObject::from_object(page()).into_resources();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].id(), Some("person_2"));
    }
}
